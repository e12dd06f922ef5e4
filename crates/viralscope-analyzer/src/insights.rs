use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Maximum number of tags kept in [`Insights::top_tags`].
pub const TOP_TAGS_LIMIT: usize = 5;
/// Maximum number of music titles kept in [`Insights::top_music`].
pub const TOP_MUSIC_LIMIT: usize = 3;
/// Maximum number of categories kept in [`Insights::top_categories`].
pub const TOP_CATEGORIES_LIMIT: usize = 3;

/// A value and how many times it occurred, as ranked by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub value: String,
    pub count: usize,
}

impl RankedEntry {
    #[must_use]
    pub fn new(value: impl Into<String>, count: usize) -> Self {
        Self {
            value: value.into(),
            count,
        }
    }
}

/// Summary of one analysis window.
///
/// Only [`crate::analyze`] constructs this type, so a value in hand always
/// describes at least one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insights {
    pub(crate) total_records: usize,
    pub(crate) avg_views: u64,
    pub(crate) avg_likes: u64,
    pub(crate) avg_duration: u32,
    pub(crate) optimal_duration: u32,
    pub(crate) duration_distribution: BTreeMap<u32, usize>,
    pub(crate) top_tags: Vec<RankedEntry>,
    pub(crate) top_music: Vec<RankedEntry>,
    pub(crate) top_categories: Vec<RankedEntry>,
}

impl Insights {
    #[must_use]
    pub fn total_records(&self) -> usize {
        self.total_records
    }

    /// Mean views, truncated toward zero.
    #[must_use]
    pub fn avg_views(&self) -> u64 {
        self.avg_views
    }

    /// Mean likes, truncated toward zero.
    #[must_use]
    pub fn avg_likes(&self) -> u64 {
        self.avg_likes
    }

    /// Mean duration in seconds, truncated toward zero.
    #[must_use]
    pub fn avg_duration(&self) -> u32 {
        self.avg_duration
    }

    /// The most frequent duration; the earliest-seen one wins a tie.
    #[must_use]
    pub fn optimal_duration(&self) -> u32 {
        self.optimal_duration
    }

    /// Record count per duration, keyed by seconds in ascending order.
    #[must_use]
    pub fn duration_distribution(&self) -> &BTreeMap<u32, usize> {
        &self.duration_distribution
    }

    #[must_use]
    pub fn top_tags(&self) -> &[RankedEntry] {
        &self.top_tags
    }

    #[must_use]
    pub fn top_music(&self) -> &[RankedEntry] {
        &self.top_music
    }

    #[must_use]
    pub fn top_categories(&self) -> &[RankedEntry] {
        &self.top_categories
    }
}
