use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::CoreError;

/// One observed short video and its engagement counters at `observed_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Platform video id, unique within a corpus.
    pub id: String,
    pub title: String,
    pub author: String,
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub duration_seconds: u32,
    /// Hashtags in the order the author listed them.
    pub tags: Vec<String>,
    pub music: String,
    /// Seconds until the opening hook lands. Collected but not analyzed.
    pub hook_time_seconds: u32,
    pub category: String,
    pub observed_at: DateTime<Utc>,
}

impl Record {
    /// Check the invariants the store relies on before accepting a record.
    ///
    /// The analysis engine does not call this; it takes records as given.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant as a [`CoreError`].
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.id.trim().is_empty() {
            return Err(CoreError::EmptyRecordId);
        }
        if self.likes > self.views {
            return Err(CoreError::LikesExceedViews {
                id: self.id.clone(),
                likes: self.likes,
                views: self.views,
            });
        }
        if self.duration_seconds == 0 {
            return Err(CoreError::NonPositiveDuration {
                id: self.id.clone(),
            });
        }
        if self.hook_time_seconds == 0 {
            return Err(CoreError::NonPositiveHookTime {
                id: self.id.clone(),
            });
        }
        Ok(())
    }
}
