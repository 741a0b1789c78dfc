use crate::config::SurveyConfig;
use crate::error::{Error, Result};
use crate::export::Exporter;
use crate::fetchers::{Fetcher, HttpFetcher};
use crate::parsers::{Parser, TextExtraction, html};
use crate::results::{SurveyReport, WordFrequencies};
use std::path::PathBuf;
use url::Url;

/// Fetch `page_url` and list the `src` values it loads from other network locations
pub async fn extract_external_resources<F: Fetcher>(
    fetcher: &F,
    page_url: &str,
) -> Result<Vec<String>> {
    let page = fetcher.fetch(page_url).await?;
    Ok(html::external_resources(&page, page_url))
}

/// Fetch `page_url` and return the first hyperlink whose target contains `phrase`
/// (ignoring case), resolved against `page_url`
pub async fn find_link<F: Fetcher>(fetcher: &F, phrase: &str, page_url: &str) -> Result<String> {
    let page = fetcher.fetch(page_url).await?;

    let href = html::first_link_containing(&page, phrase).ok_or_else(|| Error::LinkNotFound {
        phrase: phrase.to_string(),
        url: page_url.to_string(),
    })?;

    resolve(page_url, &href)
}

/// Fetch `page_url` and count the words of its text
pub async fn word_frequencies<F: Fetcher>(
    fetcher: &F,
    page_url: &str,
    extraction: TextExtraction,
) -> Result<WordFrequencies> {
    let page = fetcher.fetch(page_url).await?;
    Ok(Parser::word_frequencies(&page, extraction))
}

/// Join `href` onto `base_url` the way a browser resolves a link
fn resolve(base_url: &str, href: &str) -> Result<String> {
    let invalid = |source| Error::InvalidUrl {
        url: href.to_string(),
        source,
    };

    let base = Url::parse(base_url).map_err(invalid)?;
    let joined = base.join(href).map_err(invalid)?;
    Ok(joined.to_string())
}

/// Runs the survey: external resources of the target page, then the word counts of the
/// page its phrase link points at
pub struct Pipeline<F = HttpFetcher> {
    config: SurveyConfig,
    fetcher: F,
}

impl Pipeline<HttpFetcher> {
    /// Create a pipeline that fetches over HTTP
    pub fn new(config: SurveyConfig) -> Result<Self> {
        let fetcher = HttpFetcher::from_config(&config)?;
        Ok(Self { config, fetcher })
    }
}

impl<F: Fetcher> Pipeline<F> {
    /// Create a pipeline with a custom fetcher
    pub fn with_fetcher(config: SurveyConfig, fetcher: F) -> Self {
        Self { config, fetcher }
    }

    /// Override the page to survey
    pub fn with_target_url(mut self, url: impl Into<String>) -> Self {
        self.config.target_url = url.into();
        self
    }

    /// Override the phrase used to find the linked page
    pub fn with_phrase(mut self, phrase: impl Into<String>) -> Self {
        self.config.link_phrase = phrase.into();
        self
    }

    /// Override where the artifacts are written
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    /// Override how text is recovered from the linked page
    pub fn with_text_extraction(mut self, extraction: TextExtraction) -> Self {
        self.config.text_extraction = extraction;
        self
    }

    /// Configuration the next run will use
    pub fn config(&self) -> &SurveyConfig {
        &self.config
    }

    /// Run every stage in order. The first failure aborts the run; artifacts written
    /// by earlier stages stay on disk.
    pub async fn run(&self) -> Result<SurveyReport> {
        let config = &self.config;
        let exporter = Exporter::new(&config.output_dir);

        ::log::info!("Extracting external resources from {}", config.target_url);
        let external_resources =
            extract_external_resources(&self.fetcher, &config.target_url).await?;
        ::log::info!("Found {} external resources", external_resources.len());
        let resources_path = exporter.write(&external_resources, &config.resources_output)?;

        ::log::info!(
            "Looking for a link containing {:?} on {}",
            config.link_phrase,
            config.target_url
        );
        let policy_url = find_link(&self.fetcher, &config.link_phrase, &config.target_url).await?;
        ::log::info!("Counting words on {}", policy_url);

        let word_counts =
            word_frequencies(&self.fetcher, &policy_url, config.text_extraction).await?;
        ::log::info!(
            "Counted {} words, {} distinct",
            word_counts.total(),
            word_counts.len()
        );
        let word_count_path = exporter.write(&word_counts, &config.word_count_output)?;

        Ok(SurveyReport {
            target_url: config.target_url.clone(),
            external_resources,
            policy_url,
            word_counts,
            resources_path,
            word_count_path,
        })
    }
}
