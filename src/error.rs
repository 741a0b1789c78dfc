use reqwest::StatusCode;
use thiserror::Error;

/// Errors that abort a survey run
#[derive(Debug, Error)]
pub enum Error {
    /// DNS, connection or timeout failure while fetching a page
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("request to {url} failed with status {status}")]
    HttpStatus { url: String, status: StatusCode },

    /// A URL could not be parsed or joined
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// No hyperlink on the page contains the requested phrase
    #[error("no link containing {phrase:?} found on {url}")]
    LinkNotFound { phrase: String, url: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
