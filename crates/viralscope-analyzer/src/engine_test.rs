use chrono::{TimeZone, Utc};

use super::*;

fn record(id: &str, duration: u32, tags: &[&str], music: &str, category: &str) -> Record {
    Record {
        id: id.to_string(),
        title: format!("video {id}"),
        author: "tester".to_string(),
        views: 1_000,
        likes: 100,
        comments: 10,
        shares: 5,
        duration_seconds: duration,
        tags: tags.iter().map(|t| (*t).to_string()).collect(),
        music: music.to_string(),
        hook_time_seconds: 2,
        category: category.to_string(),
        observed_at: Utc.with_ymd_and_hms(2026, 2, 10, 8, 0, 0).unwrap(),
    }
}

fn pairs(entries: &[RankedEntry]) -> Vec<(&str, usize)> {
    entries.iter().map(|e| (e.value.as_str(), e.count)).collect()
}

#[test]
fn empty_corpus_is_an_error() {
    assert_eq!(analyze(&[]), Err(AnalysisError::EmptyCorpus));
}

#[test]
fn three_record_scenario() {
    let records = vec![
        record("1", 15, &["a", "b"], "m", "c"),
        record("2", 15, &["a"], "m", "c"),
        record("3", 30, &["c"], "m", "c"),
    ];
    let insights = analyze(&records).unwrap();

    assert_eq!(insights.total_records(), 3);
    assert_eq!(insights.optimal_duration(), 15);
    assert_eq!(
        insights.duration_distribution(),
        &BTreeMap::from([(15, 2), (30, 1)])
    );
    assert_eq!(pairs(insights.top_tags()), vec![("a", 2), ("b", 1), ("c", 1)]);
}

#[test]
fn music_ties_keep_first_seen_order() {
    let records: Vec<Record> = ["X", "Y", "X", "Z", "Y"]
        .iter()
        .enumerate()
        .map(|(i, music)| record(&i.to_string(), 30, &[], music, "food"))
        .collect();
    let insights = analyze(&records).unwrap();
    assert_eq!(pairs(insights.top_music()), vec![("X", 2), ("Y", 2), ("Z", 1)]);
}

#[test]
fn music_tie_order_follows_input_not_name() {
    let records: Vec<Record> = ["Y", "X", "X", "Y"]
        .iter()
        .enumerate()
        .map(|(i, music)| record(&i.to_string(), 30, &[], music, "food"))
        .collect();
    let insights = analyze(&records).unwrap();
    assert_eq!(pairs(insights.top_music()), vec![("Y", 2), ("X", 2)]);
}

#[test]
fn optimal_duration_tie_goes_to_first_seen() {
    let records = vec![
        record("1", 60, &[], "m", "c"),
        record("2", 15, &[], "m", "c"),
        record("3", 15, &[], "m", "c"),
        record("4", 60, &[], "m", "c"),
    ];
    let insights = analyze(&records).unwrap();
    assert_eq!(insights.optimal_duration(), 60);

    let reversed: Vec<Record> = records.into_iter().rev().collect();
    // 60 is still first in reversed order: ids 4, 3, 2, 1
    assert_eq!(analyze(&reversed).unwrap().optimal_duration(), 60);
}

#[test]
fn optimal_duration_tie_with_smaller_key_seen_first() {
    let records = vec![
        record("1", 45, &[], "m", "c"),
        record("2", 20, &[], "m", "c"),
        record("3", 20, &[], "m", "c"),
        record("4", 45, &[], "m", "c"),
    ];
    let insights = analyze(&records).unwrap();
    assert_eq!(insights.optimal_duration(), 45);
}

#[test]
fn averages_are_truncated() {
    let mut low = record("1", 15, &[], "m", "c");
    low.views = 10;
    low.likes = 1;
    let mut high = record("2", 20, &[], "m", "c");
    high.views = 11;
    high.likes = 2;

    let insights = analyze(&[low, high]).unwrap();
    assert_eq!(insights.avg_views(), 10);
    assert_eq!(insights.avg_likes(), 1);
    assert_eq!(insights.avg_duration(), 17);
}

#[test]
fn averages_do_not_overflow_on_huge_counters() {
    let mut a = record("1", 15, &[], "m", "c");
    a.views = u64::MAX;
    a.likes = u64::MAX;
    let b = a.clone();
    let insights = analyze(&[a, b]).unwrap();
    assert_eq!(insights.avg_views(), u64::MAX);
    assert_eq!(insights.avg_likes(), u64::MAX);
}

#[test]
fn distribution_sums_to_total_records() {
    let records: Vec<Record> = [15, 20, 30, 45, 60, 15, 30, 30, 60, 20, 15]
        .iter()
        .enumerate()
        .map(|(i, &d)| record(&i.to_string(), d, &["t"], "m", "c"))
        .collect();
    let insights = analyze(&records).unwrap();

    let sum: usize = insights.duration_distribution().values().sum();
    assert_eq!(sum, insights.total_records());

    let max = insights.duration_distribution().values().max().copied();
    assert_eq!(
        insights
            .duration_distribution()
            .get(&insights.optimal_duration())
            .copied(),
        max
    );
    assert_eq!(insights.optimal_duration(), 15);
}

#[test]
fn top_tags_capped_at_five_and_non_increasing() {
    let records = vec![
        record("1", 15, &["a", "b", "c", "d"], "m", "c"),
        record("2", 15, &["e", "f", "g"], "m", "c"),
        record("3", 15, &["g", "f", "a"], "m", "c"),
        record("4", 15, &["g"], "m", "c"),
    ];
    let insights = analyze(&records).unwrap();
    let tags = insights.top_tags();

    assert_eq!(tags.len(), 5);
    assert!(tags.windows(2).all(|w| w[0].count >= w[1].count));
    assert_eq!(
        pairs(tags),
        vec![("g", 3), ("a", 2), ("f", 2), ("b", 1), ("c", 1)]
    );
}

#[test]
fn fewer_distinct_tags_than_limit() {
    let records = vec![
        record("1", 15, &["a"], "m", "c"),
        record("2", 15, &["b", "a"], "m", "c"),
    ];
    let insights = analyze(&records).unwrap();
    assert_eq!(pairs(insights.top_tags()), vec![("a", 2), ("b", 1)]);
}

#[test]
fn records_without_tags_produce_empty_tag_ranking() {
    let records = vec![record("1", 15, &[], "m", "c")];
    let insights = analyze(&records).unwrap();
    assert!(insights.top_tags().is_empty());
}

#[test]
fn categories_capped_at_three() {
    let records: Vec<Record> = ["food", "travel", "pets", "comedy", "pets", "travel", "pets"]
        .iter()
        .enumerate()
        .map(|(i, cat)| record(&i.to_string(), 30, &[], "m", cat))
        .collect();
    let insights = analyze(&records).unwrap();
    assert_eq!(
        pairs(insights.top_categories()),
        vec![("pets", 3), ("travel", 2), ("food", 1)]
    );
}

#[test]
fn music_counted_once_per_record() {
    let records = vec![
        record("1", 15, &["x", "y"], "Song", "c"),
        record("2", 15, &["x"], "Song", "c"),
    ];
    let insights = analyze(&records).unwrap();
    assert_eq!(pairs(insights.top_music()), vec![("Song", 2)]);
}

#[test]
fn analysis_is_idempotent() {
    let records = vec![
        record("1", 15, &["a", "b"], "X", "food"),
        record("2", 30, &["b"], "Y", "pets"),
        record("3", 30, &["c"], "X", "food"),
    ];
    assert_eq!(analyze(&records), analyze(&records));
}

#[test]
fn input_is_left_untouched() {
    let records = vec![
        record("1", 15, &["b", "a"], "X", "food"),
        record("2", 30, &["a"], "Y", "pets"),
    ];
    let before = records.clone();
    analyze(&records).unwrap();
    assert_eq!(records, before);
}

#[test]
fn permissive_about_inconsistent_counters() {
    let mut odd = record("1", 15, &[], "m", "c");
    odd.views = 5;
    odd.likes = 50;
    let insights = analyze(&[odd]).unwrap();
    assert_eq!(insights.avg_views(), 5);
    assert_eq!(insights.avg_likes(), 50);
}

#[test]
fn insights_serialize_with_named_fields() {
    let records = vec![record("1", 15, &["a"], "X", "food")];
    let json = serde_json::to_value(analyze(&records).unwrap()).unwrap();
    assert_eq!(json["total_records"], 1);
    assert_eq!(json["optimal_duration"], 15);
    assert_eq!(json["duration_distribution"]["15"], 1);
    assert_eq!(json["top_tags"][0]["value"], "a");
    assert_eq!(json["top_tags"][0]["count"], 1);
}
