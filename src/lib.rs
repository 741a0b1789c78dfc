//! Surveys a web page: lists the resources it loads from other hosts, follows the
//! first link matching a phrase (the privacy policy by default) and counts the words
//! on the linked page. Both results are written as JSON files.

pub mod config;
pub mod error;
pub mod export;
pub mod fetchers;
pub mod filter;
pub mod parsers;
pub mod pipeline;
pub mod results;

// Re-export commonly used types for convenience
pub use config::SurveyConfig;
pub use error::{Error, Result};
pub use export::export_json;
pub use fetchers::{Fetcher, HttpFetcher};
pub use filter::is_external;
pub use parsers::TextExtraction;
pub use pipeline::{Pipeline, extract_external_resources, find_link, word_frequencies};
pub use results::{SurveyReport, WordFrequencies};

/// Run the survey described by `config` over HTTP
pub async fn run(config: SurveyConfig) -> Result<SurveyReport> {
    Pipeline::new(config)?.run().await
}
