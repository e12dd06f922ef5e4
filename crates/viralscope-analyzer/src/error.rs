use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The requested window holds no records. Callers report this and stop;
    /// it is not a failure of the corpus itself.
    #[error("no data available for this window")]
    EmptyCorpus,
}
