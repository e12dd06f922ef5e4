use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DURATION_SERIES: &str = "duration";
pub const TAGS_SERIES: &str = "tags";
pub const MUSIC_SERIES: &str = "music";
pub const CATEGORIES_SERIES: &str = "categories";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    VerticalBar,
    HorizontalBar,
    Pie,
}

/// One chart's worth of data, already ranked and labelled.
///
/// `labels[i]` pairs with `values[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub labels: Vec<String>,
    pub values: Vec<usize>,
}

/// A collaborator that turns chart series into artifacts on disk.
pub trait ChartSink {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Render every series and return the artifact path per series name.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if any artifact cannot be produced.
    fn render_all(
        &self,
        series: &BTreeMap<String, ChartSeries>,
    ) -> Result<BTreeMap<String, PathBuf>, Self::Error>;
}
