//! Pattern analysis for viral short videos.
//!
//! [`analyze`] turns a snapshot of [`Record`](viralscope_core::Record)s into an
//! immutable [`Insights`] value. The `render` module formats insights as a text
//! report, a percentage table, or chart series; `rules` derives the action
//! items printed at the end of the report. Nothing in this crate performs I/O.

pub mod engine;
pub mod error;
pub mod insights;
pub mod render;
pub mod rules;
pub mod series;

pub use engine::analyze;
pub use error::AnalysisError;
pub use insights::{Insights, RankedEntry};
pub use render::{duration_shares, render_chart_series, render_table, render_text, DurationShare};
pub use rules::recommendations;
pub use series::{ChartKind, ChartSeries, ChartSink};
