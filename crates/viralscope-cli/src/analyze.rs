//! `analyze`: print the insights for the recent window.

use viralscope_analyzer::{render_table, Insights};

use crate::context::{load_insights, no_data, RunContext};
use crate::{OutputFormat, Outcome};

/// # Errors
///
/// Returns an error if the store cannot be read or the insights cannot be
/// serialized.
pub(crate) async fn run_analyze(
    ctx: &RunContext,
    window_hours: u32,
    format: OutputFormat,
) -> anyhow::Result<Outcome> {
    let pool = ctx.open_store().await?;
    let insights = load_insights(&pool, window_hours).await;
    pool.close().await;

    let Some(insights) = insights? else {
        return Ok(no_data(window_hours));
    };
    print!("{}", format_insights(&insights, format)?);
    Ok(Outcome::Completed)
}

pub(crate) fn format_insights(insights: &Insights, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(insights)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Table => Ok(render_table(insights)),
    }
}
