//! Record sources for the ingest command.
//!
//! Every source implements [`RecordSource`]. Only [`MockSource`] ships; it
//! produces plausible viral-video records from fixed pools so the rest of the
//! pipeline can run without a platform account.

pub mod error;
pub mod mock;
pub mod source;

pub use error::ScraperError;
pub use mock::MockSource;
pub use source::{source_from_settings, RecordSource};
