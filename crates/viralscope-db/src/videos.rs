//! Database operations for the `videos` table: the corpus accessor.

use chrono::{DateTime, Duration, Utc};
use sqlx::{Sqlite, SqlitePool};
use viralscope_core::Record;

use crate::DbError;

// ---------------------------------------------------------------------------
// Row type
// ---------------------------------------------------------------------------

/// A row from the `videos` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct VideoRow {
    pub id: i64,
    pub video_id: String,
    pub title: String,
    pub author: String,
    pub views: i64,
    pub likes: i64,
    pub comments: i64,
    pub shares: i64,
    pub duration: i64,
    /// JSON array of tag strings.
    pub tags: String,
    pub music: String,
    pub hook_time: i64,
    pub category: String,
    pub observed_at: DateTime<Utc>,
}

impl TryFrom<VideoRow> for Record {
    type Error = DbError;

    fn try_from(row: VideoRow) -> Result<Self, Self::Error> {
        let corrupt = |reason: String| DbError::Corrupt {
            video_id: row.video_id.clone(),
            reason,
        };
        let count = |field: &str, value: i64| {
            u64::try_from(value).map_err(|_| corrupt(format!("negative {field}: {value}")))
        };
        let seconds = |field: &str, value: i64| {
            u32::try_from(value).map_err(|_| corrupt(format!("{field} out of range: {value}")))
        };

        let tags: Vec<String> = serde_json::from_str(&row.tags)
            .map_err(|e| corrupt(format!("tags column is not a JSON string array: {e}")))?;

        Ok(Record {
            views: count("views", row.views)?,
            likes: count("likes", row.likes)?,
            comments: count("comments", row.comments)?,
            shares: count("shares", row.shares)?,
            duration_seconds: seconds("duration", row.duration)?,
            hook_time_seconds: seconds("hook_time", row.hook_time)?,
            tags,
            id: row.video_id,
            title: row.title,
            author: row.author,
            music: row.music,
            category: row.category,
            observed_at: row.observed_at,
        })
    }
}

/// Outcome of a batch ingest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaveSummary {
    pub inserted: usize,
    /// Records whose id was already stored; left untouched.
    pub duplicates: usize,
    /// Records that failed [`Record::validate`]; never written.
    pub invalid: usize,
}

// ---------------------------------------------------------------------------
// Writes
// ---------------------------------------------------------------------------

/// Insert one record.
///
/// Accepts a pool or an open transaction.
///
/// # Errors
///
/// Returns [`DbError::DuplicateRecord`] if a video with the same id is already
/// stored, [`DbError::OutOfRange`] if a counter exceeds `i64::MAX`, or
/// [`DbError::Sqlx`] if the insert fails.
pub async fn insert_record<'e, E>(executor: E, record: &Record) -> Result<(), DbError>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let tags = serde_json::to_string(&record.tags)?;

    let result = sqlx::query(
        "INSERT INTO videos \
             (video_id, title, author, views, likes, comments, shares, \
              duration, tags, music, hook_time, category, observed_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) \
         ON CONFLICT (video_id) DO NOTHING",
    )
    .bind(&record.id)
    .bind(&record.title)
    .bind(&record.author)
    .bind(to_column("views", record.views)?)
    .bind(to_column("likes", record.likes)?)
    .bind(to_column("comments", record.comments)?)
    .bind(to_column("shares", record.shares)?)
    .bind(i64::from(record.duration_seconds))
    .bind(tags)
    .bind(&record.music)
    .bind(i64::from(record.hook_time_seconds))
    .bind(&record.category)
    .bind(record.observed_at)
    .execute(executor)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::DuplicateRecord {
            id: record.id.clone(),
        });
    }

    Ok(())
}

/// Store a batch of records in one transaction.
///
/// Duplicate ids are skipped silently, so re-ingesting a batch is harmless.
/// Records that fail validation are skipped with a warning. Any other error
/// rolls back the whole batch.
///
/// # Errors
///
/// Returns [`DbError`] if the transaction cannot be opened or committed, or
/// if an insert fails for a reason other than a duplicate id.
pub async fn save_records(pool: &SqlitePool, records: &[Record]) -> Result<SaveSummary, DbError> {
    let mut tx = pool.begin().await?;
    let mut summary = SaveSummary::default();

    for record in records {
        if let Err(e) = record.validate() {
            tracing::warn!(id = %record.id, error = %e, "skipping invalid record");
            summary.invalid += 1;
            continue;
        }

        match insert_record(&mut *tx, record).await {
            Ok(()) => summary.inserted += 1,
            Err(DbError::DuplicateRecord { id }) => {
                tracing::debug!(%id, "record already stored, skipping");
                summary.duplicates += 1;
            }
            Err(e) => return Err(e),
        }
    }

    tx.commit().await?;
    Ok(summary)
}

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

/// Records observed within `since` of now, most viewed first.
///
/// The full window is read before returning, so callers always analyze a
/// stable snapshot. A window reaching past the earliest representable
/// timestamp covers the whole store.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails or [`DbError::Corrupt`] if a
/// stored row cannot be turned back into a [`Record`].
pub async fn fetch_window(pool: &SqlitePool, since: Duration) -> Result<Vec<Record>, DbError> {
    fetch_since(pool, window_start(Utc::now(), since)).await
}

fn window_start(now: DateTime<Utc>, since: Duration) -> DateTime<Utc> {
    now.checked_sub_signed(since)
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Records observed at or after `cutoff`, ordered by views descending and
/// then by video id so equal view counts come back in a stable order.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails or [`DbError::Corrupt`] if a
/// stored row cannot be turned back into a [`Record`].
pub async fn fetch_since(
    pool: &SqlitePool,
    cutoff: DateTime<Utc>,
) -> Result<Vec<Record>, DbError> {
    let rows = sqlx::query_as::<_, VideoRow>(
        "SELECT id, video_id, title, author, views, likes, comments, shares, \
                duration, tags, music, hook_time, category, observed_at \
         FROM videos \
         WHERE observed_at >= ? \
         ORDER BY views DESC, video_id ASC",
    )
    .bind(cutoff)
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(Record::try_from).collect()
}

/// Total number of stored videos, regardless of age.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn count_records(pool: &SqlitePool) -> Result<usize, DbError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM videos")
        .fetch_one(pool)
        .await?;
    Ok(usize::try_from(count).unwrap_or(0))
}

fn to_column(field: &'static str, value: u64) -> Result<i64, DbError> {
    i64::try_from(value).map_err(|_| DbError::OutOfRange { field, value })
}
