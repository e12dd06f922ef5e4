//! `ingest`: pull one batch from the configured source into the store.

use anyhow::Context;
use viralscope_scraper::source_from_settings;

use crate::context::RunContext;
use crate::Outcome;

/// Fetch `count` records (default `scraper.batch_size`) and store them.
///
/// Records already stored are skipped, so running ingest twice on the same
/// day with the same seed adds nothing the second time.
///
/// # Errors
///
/// Returns an error if the source is unknown or fails, or if the store cannot
/// be opened or written.
pub(crate) async fn run_ingest(
    ctx: &RunContext,
    count: Option<usize>,
    seed: Option<u64>,
) -> anyhow::Result<Outcome> {
    let count = count.unwrap_or(ctx.settings.scraper.batch_size);
    let mut source = source_from_settings(&ctx.settings.scraper, seed)?;
    let records = source
        .fetch_batch(count)
        .with_context(|| format!("source '{}' failed to produce a batch", source.name()))?;

    let pool = ctx.open_store().await?;
    let summary = viralscope_db::save_records(&pool, &records)
        .await
        .context("failed to store the batch")?;
    let stored = viralscope_db::count_records(&pool).await?;
    pool.close().await;

    tracing::info!(
        source = source.name(),
        fetched = records.len(),
        inserted = summary.inserted,
        duplicates = summary.duplicates,
        invalid = summary.invalid,
        "ingest finished"
    );
    println!(
        "Ingested {} new records ({} already stored, {} invalid skipped); {stored} records in the store.",
        summary.inserted, summary.duplicates, summary.invalid
    );
    Ok(Outcome::Completed)
}
