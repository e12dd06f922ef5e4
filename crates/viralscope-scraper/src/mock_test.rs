use std::collections::HashSet;

use chrono::TimeZone;

use super::*;

fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 10, 12, 0, 0).unwrap()
}

#[test]
fn batch_has_requested_size() {
    let mut source = MockSource::seeded(1).observed_at(fixed_time());
    assert_eq!(source.fetch_batch(50).unwrap().len(), 50);
}

#[test]
fn zero_count_rejected() {
    let mut source = MockSource::seeded(1);
    assert!(matches!(source.fetch_batch(0), Err(ScraperError::EmptyBatch)));
}

#[test]
fn same_seed_same_batch() {
    let mut a = MockSource::seeded(42).observed_at(fixed_time());
    let mut b = MockSource::seeded(42).observed_at(fixed_time());
    assert_eq!(a.fetch_batch(20).unwrap(), b.fetch_batch(20).unwrap());
}

#[test]
fn ids_follow_date_and_index() {
    let mut source = MockSource::seeded(3).observed_at(fixed_time());
    let first = source.fetch_batch(2).unwrap();
    assert_eq!(first[0].id, "DY202602100000");
    assert_eq!(first[1].id, "DY202602100001");

    let second = source.fetch_batch(1).unwrap();
    assert_eq!(second[0].id, "DY202602100002");
    assert_eq!(second[0].title.split('#').next_back(), Some("3"));
}

#[test]
fn fresh_source_repeats_ids_on_the_same_day() {
    let mut a = MockSource::seeded(1).observed_at(fixed_time());
    let mut b = MockSource::seeded(2).observed_at(fixed_time());
    let ids_a: Vec<String> = a.fetch_batch(5).unwrap().into_iter().map(|r| r.id).collect();
    let ids_b: Vec<String> = b.fetch_batch(5).unwrap().into_iter().map(|r| r.id).collect();
    assert_eq!(ids_a, ids_b);
}

#[test]
fn generated_records_respect_pools_and_ranges() {
    let mut source = MockSource::seeded(7).observed_at(fixed_time());
    for record in source.fetch_batch(200).unwrap() {
        assert!(record.validate().is_ok(), "{record:?}");
        assert!((MIN_VIEWS..=MAX_VIEWS).contains(&record.views));
        // +1 absorbs float rounding at the ratio bounds
        assert!(record.likes + 1 >= record.views / 20);
        assert!(record.likes <= record.views * 15 / 100 + 1);
        assert!(record.comments <= record.likes * 3 / 10 + 1);
        assert!(record.shares <= record.likes * 15 / 100 + 1);
        assert!(DURATIONS.contains(&record.duration_seconds));
        assert!((1..=3).contains(&record.hook_time_seconds));
        assert!(CATEGORIES.contains(&record.category.as_str()));
        assert!(MUSIC_POOL.contains(&record.music.as_str()));
        assert!(AUTHORS.contains(&record.author.as_str()));
        assert!((3..=5).contains(&record.tags.len()));

        let distinct: HashSet<&String> = record.tags.iter().collect();
        assert_eq!(distinct.len(), record.tags.len(), "tags repeat: {:?}", record.tags);
        assert!(record.tags.iter().all(|t| TAG_POOL.contains(&t.as_str())));
        assert_eq!(record.observed_at, fixed_time());
    }
}
