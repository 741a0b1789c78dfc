use crate::error::Result;
use crate::parsers::TextExtraction;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Page surveyed when nothing else is configured
pub const DEFAULT_TARGET_URL: &str = "https://www.cfcunderwriting.com/";

/// Phrase used to locate the privacy policy link
pub const DEFAULT_LINK_PHRASE: &str = "privacy";

/// Configuration for a survey run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyConfig {
    /// Page whose resources and links are inspected
    #[serde(default = "default_target_url")]
    pub target_url: String,

    /// Phrase matched case-insensitively against hyperlink targets
    #[serde(default = "default_link_phrase")]
    pub link_phrase: String,

    /// Directory the JSON artifacts are written into
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// File stem for the external resource list
    #[serde(default = "default_resources_output")]
    pub resources_output: String,

    /// File stem for the word frequency table
    #[serde(default = "default_word_count_output")]
    pub word_count_output: String,

    /// How visible text is recovered from the linked page
    #[serde(default)]
    pub text_extraction: TextExtraction,

    /// Keep the body of non-2xx responses instead of failing the run
    #[serde(default)]
    pub accept_error_status: bool,

    /// Request timeout in seconds (no timeout when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl SurveyConfig {
    /// Create a configuration for the given page with default values
    pub fn new(target_url: &str) -> Self {
        Self {
            target_url: target_url.to_string(),
            ..Self::default()
        }
    }

    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            target_url: default_target_url(),
            link_phrase: default_link_phrase(),
            output_dir: default_output_dir(),
            resources_output: default_resources_output(),
            word_count_output: default_word_count_output(),
            text_extraction: TextExtraction::default(),
            accept_error_status: false,
            timeout_secs: None,
        }
    }
}

fn default_target_url() -> String {
    DEFAULT_TARGET_URL.to_string()
}

fn default_link_phrase() -> String {
    DEFAULT_LINK_PHRASE.to_string()
}

/// Artifacts land in the current working directory by default
fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_resources_output() -> String {
    "external_resources".to_string()
}

fn default_word_count_output() -> String {
    "privacy_policy_word_count".to_string()
}
