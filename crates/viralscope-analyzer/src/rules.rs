//! Action items derived from an [`Insights`] summary.

use crate::insights::{Insights, RankedEntry};

const TAGS_IN_RECOMMENDATION: usize = 3;

/// Build the ordered recommendation list for a report.
///
/// Rules that depend on a ranked list are skipped when that list is empty
/// (for example, a window in which no record carried a tag).
#[must_use]
pub fn recommendations(insights: &Insights) -> Vec<String> {
    let mut items = Vec::with_capacity(7);

    items.push(format!(
        "Keep videos around {} seconds",
        insights.optimal_duration()
    ));
    items.push(
        "Open with a strong hook in the first 3 seconds (suspense, conflict, or a twist)"
            .to_string(),
    );

    let tags = insights.top_tags();
    if !tags.is_empty() {
        let shown = &tags[..tags.len().min(TAGS_IN_RECOMMENDATION)];
        items.push(format!("Use trending tags: {}", join_values(shown)));
    }

    if let Some(music) = insights.top_music().first() {
        items.push(format!("Pick trending music: {}", music.value));
    }

    if !insights.top_categories().is_empty() {
        items.push(format!(
            "Hot categories: {}",
            join_values(insights.top_categories())
        ));
    }

    items.push("Prompt viewers to comment, like, and share".to_string());
    items.push("Post during 12:00-14:00 or 18:00-22:00 local time".to_string());

    items
}

fn join_values(entries: &[RankedEntry]) -> String {
    entries
        .iter()
        .map(|e| e.value.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn insights(
        tags: &[(&str, usize)],
        music: &[(&str, usize)],
        categories: &[(&str, usize)],
    ) -> Insights {
        let to_entries = |pairs: &[(&str, usize)]| {
            pairs
                .iter()
                .map(|&(v, c)| RankedEntry::new(v, c))
                .collect::<Vec<_>>()
        };
        Insights {
            total_records: 4,
            avg_views: 1_000,
            avg_likes: 100,
            avg_duration: 30,
            optimal_duration: 30,
            duration_distribution: BTreeMap::from([(30, 4)]),
            top_tags: to_entries(tags),
            top_music: to_entries(music),
            top_categories: to_entries(categories),
        }
    }

    #[test]
    fn full_insights_produce_seven_rules_in_order() {
        let insights = insights(
            &[("#a", 4), ("#b", 3), ("#c", 2), ("#d", 1)],
            &[("Song", 3), ("Other", 1)],
            &[("food", 2), ("pets", 1), ("travel", 1)],
        );
        let recs = recommendations(&insights);

        assert_eq!(recs.len(), 7);
        assert_eq!(recs[0], "Keep videos around 30 seconds");
        assert!(recs[1].contains("first 3 seconds"));
        assert_eq!(recs[2], "Use trending tags: #a, #b, #c");
        assert_eq!(recs[3], "Pick trending music: Song");
        assert_eq!(recs[4], "Hot categories: food, pets, travel");
        assert!(recs[5].contains("comment"));
        assert!(recs[6].contains("12:00-14:00"));
        assert!(recs[6].contains("18:00-22:00"));
    }

    #[test]
    fn fewer_than_three_tags_joins_what_exists() {
        let insights = insights(&[("#solo", 1)], &[("Song", 1)], &[("food", 1)]);
        let recs = recommendations(&insights);
        assert_eq!(recs[2], "Use trending tags: #solo");
    }

    #[test]
    fn missing_tags_skip_the_tag_rule() {
        let insights = insights(&[], &[("Song", 1)], &[("food", 1)]);
        let recs = recommendations(&insights);
        assert_eq!(recs.len(), 6);
        assert!(recs.iter().all(|r| !r.starts_with("Use trending tags")));
        assert_eq!(recs[2], "Pick trending music: Song");
    }
}
