//! Database operations for `daily_reports`: one persisted summary per day.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::SqlitePool;
use viralscope_analyzer::Insights;

use crate::DbError;

/// A row from the `daily_reports` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DailyReportRow {
    pub id: i64,
    pub report_date: NaiveDate,
    pub total_videos: i64,
    pub avg_views: i64,
    pub avg_duration: i64,
    /// JSON array of `{value, count}` objects.
    pub top_tags: String,
    /// JSON array of `{value, count}` objects.
    pub top_music: String,
    /// The full [`Insights`] value as JSON.
    pub insights: String,
    pub created_at: DateTime<Utc>,
}

/// Store the summary for `report_date`, replacing any earlier one for that day.
///
/// # Errors
///
/// Returns [`DbError::Json`] if the insights cannot be serialized,
/// [`DbError::OutOfRange`] if a counter exceeds `i64::MAX`, or
/// [`DbError::Sqlx`] if the upsert fails.
pub async fn upsert_daily_report(
    pool: &SqlitePool,
    report_date: NaiveDate,
    insights: &Insights,
) -> Result<DailyReportRow, DbError> {
    let top_tags = serde_json::to_string(insights.top_tags())?;
    let top_music = serde_json::to_string(insights.top_music())?;
    let full = serde_json::to_string(insights)?;
    let total_videos = i64::try_from(insights.total_records()).map_err(|_| DbError::OutOfRange {
        field: "total_videos",
        value: insights.total_records() as u64,
    })?;
    let avg_views = i64::try_from(insights.avg_views()).map_err(|_| DbError::OutOfRange {
        field: "avg_views",
        value: insights.avg_views(),
    })?;

    let row = sqlx::query_as::<_, DailyReportRow>(
        "INSERT INTO daily_reports \
             (report_date, total_videos, avg_views, avg_duration, \
              top_tags, top_music, insights, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?) \
         ON CONFLICT (report_date) DO UPDATE SET \
             total_videos = excluded.total_videos, \
             avg_views    = excluded.avg_views, \
             avg_duration = excluded.avg_duration, \
             top_tags     = excluded.top_tags, \
             top_music    = excluded.top_music, \
             insights     = excluded.insights, \
             created_at   = excluded.created_at \
         RETURNING id, report_date, total_videos, avg_views, avg_duration, \
                   top_tags, top_music, insights, created_at",
    )
    .bind(report_date)
    .bind(total_videos)
    .bind(avg_views)
    .bind(i64::from(insights.avg_duration()))
    .bind(top_tags)
    .bind(top_music)
    .bind(full)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    tracing::debug!(%report_date, total_videos, "stored daily report");
    Ok(row)
}

/// The stored summary for `report_date`, if any.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn get_daily_report(
    pool: &SqlitePool,
    report_date: NaiveDate,
) -> Result<Option<DailyReportRow>, DbError> {
    let row = sqlx::query_as::<_, DailyReportRow>(
        "SELECT id, report_date, total_videos, avg_views, avg_duration, \
                top_tags, top_music, insights, created_at \
         FROM daily_reports \
         WHERE report_date = ?",
    )
    .bind(report_date)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}
