use viralscope_core::settings::ScraperSettings;
use viralscope_core::Record;

use crate::error::ScraperError;
use crate::mock::MockSource;

/// Anything that can hand the ingest command a batch of records.
pub trait RecordSource {
    /// Short identifier used in logs, e.g. `"mock"`.
    fn name(&self) -> &str;

    /// Produce up to `count` records.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError`] if the batch cannot be produced.
    fn fetch_batch(&mut self, count: usize) -> Result<Vec<Record>, ScraperError>;
}

/// Build the source named by `scraper.source`.
///
/// `seed` makes the mock source reproducible; real sources would ignore it.
///
/// # Errors
///
/// Returns [`ScraperError::UnknownSource`] for any name other than `mock`.
pub fn source_from_settings(
    settings: &ScraperSettings,
    seed: Option<u64>,
) -> Result<Box<dyn RecordSource>, ScraperError> {
    match settings.source.trim() {
        "mock" => {
            let source = match seed {
                Some(seed) => MockSource::seeded(seed),
                None => MockSource::new(),
            };
            Ok(Box::new(source))
        }
        other => Err(ScraperError::UnknownSource(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_source_from_default_settings() {
        let source = source_from_settings(&ScraperSettings::default(), None).unwrap();
        assert_eq!(source.name(), "mock");
    }

    #[test]
    fn unknown_source_rejected() {
        let settings = ScraperSettings {
            source: "douyin-live".to_string(),
            batch_size: 50,
        };
        let err = source_from_settings(&settings, None).err().unwrap();
        assert!(matches!(err, ScraperError::UnknownSource(ref s) if s == "douyin-live"));
    }

    #[test]
    fn seeded_sources_agree() {
        let settings = ScraperSettings::default();
        let mut a = source_from_settings(&settings, Some(9)).unwrap();
        let mut b = source_from_settings(&settings, Some(9)).unwrap();
        let views = |batch: Vec<Record>| batch.into_iter().map(|r| r.views).collect::<Vec<_>>();
        assert_eq!(
            views(a.fetch_batch(5).unwrap()),
            views(b.fetch_batch(5).unwrap())
        );
    }
}
