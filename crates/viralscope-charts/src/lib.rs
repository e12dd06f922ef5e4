//! Chart artifacts for analysis reports.
//!
//! [`ChartWriter`] implements [`ChartSink`](viralscope_analyzer::ChartSink) by
//! writing one self-contained HTML page per series. Each page embeds a Plotly
//! figure as JSON and loads the Plotly runtime from its CDN.

pub mod error;
pub mod figure;
pub mod writer;

pub use error::ChartError;
pub use figure::figure_json;
pub use writer::{file_name_for, ChartWriter};
