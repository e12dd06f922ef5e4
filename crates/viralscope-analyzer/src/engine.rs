//! The pattern analysis engine.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use viralscope_core::Record;

use crate::error::AnalysisError;
use crate::insights::{
    Insights, RankedEntry, TOP_CATEGORIES_LIMIT, TOP_MUSIC_LIMIT, TOP_TAGS_LIMIT,
};

/// Compute [`Insights`] over a fully materialized snapshot of records.
///
/// 1. Headline means for views, likes and duration, truncated toward zero.
/// 2. Duration histogram; the modal duration becomes `optimal_duration`.
/// 3. Tag frequencies across every record's tag list, top 5.
/// 4. Music and category frequencies, one count per record, top 3 each.
///
/// Every ranking breaks ties by first appearance in `records`, so the result
/// depends on input order but never on hashing or map iteration order.
/// Records are taken as given; no field validation happens here.
///
/// # Errors
///
/// Returns [`AnalysisError::EmptyCorpus`] if `records` is empty.
pub fn analyze(records: &[Record]) -> Result<Insights, AnalysisError> {
    if records.is_empty() {
        return Err(AnalysisError::EmptyCorpus);
    }

    let total_records = records.len();
    let avg_views = truncated_mean(records.iter().map(|r| r.views), total_records);
    let avg_likes = truncated_mean(records.iter().map(|r| r.likes), total_records);
    let avg_duration = u32::try_from(truncated_mean(
        records.iter().map(|r| u64::from(r.duration_seconds)),
        total_records,
    ))
    .unwrap_or(u32::MAX);

    let ranked_durations = rank_by_frequency(records.iter().map(|r| r.duration_seconds));
    let optimal_duration = ranked_durations
        .first()
        .map(|&(duration, _)| duration)
        .ok_or(AnalysisError::EmptyCorpus)?;
    let duration_distribution: BTreeMap<u32, usize> = ranked_durations.into_iter().collect();

    let top_tags = top_entries(
        records
            .iter()
            .flat_map(|r| r.tags.iter().map(String::as_str)),
        TOP_TAGS_LIMIT,
    );
    let top_music = top_entries(records.iter().map(|r| r.music.as_str()), TOP_MUSIC_LIMIT);
    let top_categories = top_entries(
        records.iter().map(|r| r.category.as_str()),
        TOP_CATEGORIES_LIMIT,
    );

    Ok(Insights {
        total_records,
        avg_views,
        avg_likes,
        avg_duration,
        optimal_duration,
        duration_distribution,
        top_tags,
        top_music,
        top_categories,
    })
}

/// Integer mean of `values`, truncated toward zero. Summed in `u128` so a
/// large corpus of large counters cannot overflow.
fn truncated_mean(values: impl Iterator<Item = u64>, count: usize) -> u64 {
    let sum: u128 = values.map(u128::from).sum();
    let mean = sum / count as u128;
    u64::try_from(mean).unwrap_or(u64::MAX)
}

/// Count occurrences and order by descending count.
///
/// Entries are collected in first-seen order and then stably sorted, so equal
/// counts keep the order in which their keys first appeared.
fn rank_by_frequency<K, I>(items: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();

    for item in items {
        if let Some(&slot) = slots.get(&item) {
            counts[slot].1 += 1;
        } else {
            slots.insert(item.clone(), counts.len());
            counts.push((item, 1));
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

fn top_entries<'a, I>(items: I, limit: usize) -> Vec<RankedEntry>
where
    I: IntoIterator<Item = &'a str>,
{
    rank_by_frequency(items)
        .into_iter()
        .take(limit)
        .map(|(value, count)| RankedEntry::new(value, count))
        .collect()
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;
