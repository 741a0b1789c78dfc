use crate::config::SurveyConfig;
use crate::error::{Error, Result};
use crate::fetchers::Fetcher;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Fetches pages with a plain HTTP GET.
///
/// No retries and no custom headers. Redirects follow the client defaults.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    accept_error_status: bool,
}

impl HttpFetcher {
    /// Create a fetcher with no timeout that rejects non-2xx responses
    pub fn new() -> Result<Self> {
        Self::from_config(&SurveyConfig::default())
    }

    /// Create a fetcher honouring the timeout and status policy of `config`
    pub fn from_config(config: &SurveyConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            accept_error_status: config.accept_error_status,
        })
    }

    /// Keep the body of non-2xx responses instead of failing
    pub fn with_accept_error_status(mut self, accept: bool) -> Self {
        self.accept_error_status = accept;
        self
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let parsed = Url::parse(url).map_err(|source| Error::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        ::log::debug!("GET {}", parsed);
        let response = self.client.get(parsed).send().await?;

        let status = response.status();
        if !status.is_success() {
            if !self.accept_error_status {
                return Err(Error::HttpStatus {
                    url: url.to_string(),
                    status,
                });
            }
            ::log::warn!("{} answered {}, using the body anyway", url, status);
        }

        let body = response.text().await?;
        ::log::debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<p>hello</p>"))
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::new().unwrap();
        let body = fetcher.fetch(&format!("{}/", server.uri())).await.unwrap();
        assert_eq!(body, "<p>hello</p>");
    }

    #[tokio::test]
    async fn test_error_status_is_rejected_by_default() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("missing"))
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::new().unwrap();
        let err = fetcher
            .fetch(&format!("{}/gone", server.uri()))
            .await
            .unwrap_err();
        match err {
            Error::HttpStatus { status, .. } => assert_eq!(status.as_u16(), 404),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_error_status_body_when_accepted() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("<p>oops</p>"))
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::new().unwrap().with_accept_error_status(true);
        let body = fetcher.fetch(&format!("{}/", server.uri())).await.unwrap();
        assert_eq!(body, "<p>oops</p>");
    }

    #[tokio::test]
    async fn test_invalid_url() {
        let fetcher = HttpFetcher::new().unwrap();
        let err = fetcher.fetch("/not/absolute").await.unwrap_err();
        assert!(matches!(err, Error::InvalidUrl { .. }));
    }

    #[tokio::test]
    async fn test_connection_failure_is_network_error() {
        // Bind and release a port so nothing is listening on it
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();

        let fetcher = HttpFetcher::new().unwrap();
        let err = fetcher
            .fetch(&format!("http://127.0.0.1:{}/", port))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Network(_)));
    }
}
