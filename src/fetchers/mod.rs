pub mod http;

pub use http::HttpFetcher;

use crate::error::Result;
use std::future::Future;

/// Retrieves the markup of a page
pub trait Fetcher {
    /// Fetch `url` and return the response body as text
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String>> + Send;
}
