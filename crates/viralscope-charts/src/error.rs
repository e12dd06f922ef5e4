use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to create chart directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write chart {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("series {name} has {labels} labels but {values} values")]
    MismatchedSeries {
        name: String,
        labels: usize,
        values: usize,
    },
    #[error("failed to serialize chart figure: {0}")]
    Json(#[from] serde_json::Error),
}
