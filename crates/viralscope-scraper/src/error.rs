use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("unknown record source \"{0}\"; available sources: mock")]
    UnknownSource(String),

    #[error("batch size must be greater than zero")]
    EmptyBatch,
}
