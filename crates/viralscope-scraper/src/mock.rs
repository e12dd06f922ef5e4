//! Randomized stand-in for a platform scraper.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use viralscope_core::Record;

use crate::error::ScraperError;
use crate::source::RecordSource;

const CATEGORIES: &[&str] = &[
    "comedy",
    "food",
    "travel",
    "knowledge",
    "drama",
    "talent",
    "pets",
    "product picks",
];

const TAG_POOL: &[&str] = &[
    "#trending",
    "#gainfollowers",
    "#mustgoviral",
    "#viral",
    "#trafficcode",
    "#dailycomedy",
    "#foodexplore",
    "#travelvlog",
    "#protips",
    "#plottwist",
    "#talentshow",
    "#petlife",
    "#goodfinds",
];

const MUSIC_POOL: &[&str] = &[
    "Lone Brave",
    "Compendium of Materia Medica",
    "Big Wind Blows",
    "Stepping on Mountains and Rivers",
    "Shepherd of Koktokay",
    "White Moonlight and Cinnabar Mole",
    "Stars and Sea",
];

const AUTHORS: &[&str] = &[
    "xiaoming",
    "aqiang",
    "foodie_wang",
    "travel_pro",
    "knowledge_hub",
    "plot_studio",
];

/// Durations that tend to go viral, in seconds.
const DURATIONS: &[u32] = &[15, 20, 30, 45, 60];

const MIN_VIEWS: u64 = 100_000;
const MAX_VIEWS: u64 = 5_000_000;

/// Generates viral-looking records from fixed pools.
///
/// Ids take the form `DY<YYYYMMDD><index:04>`, where the date comes from the
/// observation time and the index keeps counting across batches. Running the
/// source twice on the same day therefore repeats ids, which the store skips.
pub struct MockSource {
    rng: StdRng,
    observed_at: Option<DateTime<Utc>>,
    next_index: usize,
}

impl MockSource {
    /// A source seeded from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// A reproducible source: the same seed yields the same batches.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Pin the observation timestamp instead of reading the clock per batch.
    #[must_use]
    pub fn observed_at(mut self, at: DateTime<Utc>) -> Self {
        self.observed_at = Some(at);
        self
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            observed_at: None,
            next_index: 0,
        }
    }

    fn generate(&mut self, index: usize, observed_at: DateTime<Utc>) -> Record {
        let views = self.rng.random_range(MIN_VIEWS..=MAX_VIEWS);
        let likes = scale(views, self.rng.random_range(0.05..0.15));
        let comments = scale(likes, self.rng.random_range(0.1..0.3));
        let shares = scale(likes, self.rng.random_range(0.05..0.15));

        let duration_seconds = DURATIONS.choose(&mut self.rng).copied().unwrap_or(30);
        let hook_time_seconds = self.rng.random_range(1..=3);

        let category = pick(&mut self.rng, CATEGORIES);
        let tag_count = self.rng.random_range(3..=5);
        let tags = TAG_POOL
            .choose_multiple(&mut self.rng, tag_count)
            .map(|t| (*t).to_string())
            .collect();
        let music = pick(&mut self.rng, MUSIC_POOL);
        let author = pick(&mut self.rng, AUTHORS);

        Record {
            id: format!("DY{}{index:04}", observed_at.format("%Y%m%d")),
            title: format!("{category} viral video #{}", index + 1),
            author: author.to_string(),
            views,
            likes,
            comments,
            shares,
            duration_seconds,
            tags,
            music: music.to_string(),
            hook_time_seconds,
            category: category.to_string(),
            observed_at,
        }
    }
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordSource for MockSource {
    fn name(&self) -> &str {
        "mock"
    }

    fn fetch_batch(&mut self, count: usize) -> Result<Vec<Record>, ScraperError> {
        if count == 0 {
            return Err(ScraperError::EmptyBatch);
        }

        let observed_at = self.observed_at.unwrap_or_else(Utc::now);
        let start = self.next_index;
        let records: Vec<Record> = (start..start + count)
            .map(|index| self.generate(index, observed_at))
            .collect();
        self.next_index = start + count;

        tracing::debug!(
            source = self.name(),
            count = records.len(),
            first_index = start,
            "generated mock batch"
        );
        Ok(records)
    }
}

fn pick<'a>(rng: &mut StdRng, pool: &[&'a str]) -> &'a str {
    pool.choose(rng).copied().unwrap_or_default()
}

/// `base * ratio`, truncated.
fn scale(base: u64, ratio: f64) -> u64 {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let scaled = (base as f64 * ratio) as u64;
    scaled
}

#[cfg(test)]
#[path = "mock_test.rs"]
mod tests;
