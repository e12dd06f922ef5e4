//! `report`: the full report for the recent window.

use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use viralscope_analyzer::{render_chart_series, render_text, ChartSink};
use viralscope_charts::ChartWriter;
use viralscope_core::ReportFormat;

use crate::context::{load_insights, no_data, RunContext};
use crate::Outcome;

/// Print the text report and write charts, as selected by
/// `reporter.formats`, then store today's summary unless `save` is false.
///
/// # Errors
///
/// Returns an error if the store cannot be read or written, or if a chart
/// cannot be written.
pub(crate) async fn run_report(
    ctx: &RunContext,
    window_hours: u32,
    output_dir: Option<PathBuf>,
    save: bool,
) -> anyhow::Result<Outcome> {
    let pool = ctx.open_store().await?;
    let Some(insights) = load_insights(&pool, window_hours).await? else {
        pool.close().await;
        return Ok(no_data(window_hours));
    };

    let reporter = &ctx.settings.reporter;
    if reporter.wants(ReportFormat::Text) {
        print!("{}", render_text(&insights));
    }

    if reporter.wants(ReportFormat::Charts) {
        let dir = output_dir.unwrap_or_else(|| reporter.output_dir.clone());
        let written = ChartWriter::new(&dir)
            .render_all(&render_chart_series(&insights))
            .with_context(|| format!("failed to write charts to {}", dir.display()))?;
        println!("\nCharts:");
        for path in written.values() {
            println!("  {}", path.display());
        }
    }

    if save {
        let today = Utc::now().date_naive();
        viralscope_db::upsert_daily_report(&pool, today, &insights)
            .await
            .context("failed to store the daily report")?;
        tracing::info!(%today, total = insights.total_records(), "daily report stored");
    }

    pool.close().await;
    Ok(Outcome::Completed)
}
