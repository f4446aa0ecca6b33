//! HTTP transport.
//!
//! [`Transport`] is the seam between the fetcher and the network. The
//! production implementation, [`HttpTransport`], wraps a blocking reqwest
//! client configured with the User-Agent and per-request timeout.

use reqwest::blocking::Client;
use std::time::Duration;
use thiserror::Error;

use crate::config::FetcherConfig;

/// Why a single fetch attempt failed.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("HTTP {status} fetching {url}")]
    Status { url: String, status: u16 },

    /// The request could not be completed (connect, timeout, body read).
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Performs one GET and returns the response body.
pub trait Transport {
    /// Fetch `url`. Any non-success status is an error.
    fn get(&self, url: &str) -> Result<String, FetchError>;
}

/// Fetches playlists over HTTP/HTTPS.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport from fetcher settings.
    pub fn new(config: &FetcherConfig) -> crate::error::Result<Self> {
        Self::with_options(&config.user_agent, config.request_timeout)
    }

    /// Create a transport with an explicit User-Agent and timeout.
    pub fn with_options(user_agent: &str, timeout: Duration) -> crate::error::Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_USER_AGENT;
    use httpmock::prelude::*;

    fn transport() -> HttpTransport {
        HttpTransport::new(&FetcherConfig::default()).unwrap()
    }

    #[test]
    fn slow_response_hits_timeout() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(GET).path("/slow.m3u");
            then.status(200).body("late").delay(Duration::from_secs(2));
        });

        let transport =
            HttpTransport::with_options("agent", Duration::from_millis(200)).unwrap();
        let err = transport.get(&server.url("/slow.m3u")).unwrap_err();

        assert!(matches!(err, FetchError::Request(_)));
    }

    #[test]
    fn get_returns_body() {
        let server = MockServer::start();
        let body = "#EXTM3U\n#EXTINF:-1,Channel\nhttp://example.com/stream\n";

        server.mock(|when, then| {
            when.method(GET).path("/list.m3u");
            then.status(200).body(body);
        });

        let content = transport().get(&server.url("/list.m3u")).unwrap();
        assert_eq!(content, body);
    }

    #[test]
    fn get_sends_browser_user_agent() {
        let server = MockServer::start();

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/ua.m3u")
                .header("user-agent", DEFAULT_USER_AGENT);
            then.status(200).body("ok");
        });

        transport().get(&server.url("/ua.m3u")).unwrap();
        mock.assert();
    }

    #[test]
    fn get_returns_status_error_on_404() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(GET).path("/missing.m3u");
            then.status(404).body("Not Found");
        });

        let err = transport().get(&server.url("/missing.m3u")).unwrap_err();

        assert!(matches!(err, FetchError::Status { status: 404, .. }));
        assert!(err.to_string().contains("404"), "Error should mention 404: {}", err);
    }

    #[test]
    fn get_returns_status_error_on_500() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(GET).path("/error.m3u");
            then.status(500);
        });

        let err = transport().get(&server.url("/error.m3u")).unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 500, .. }));
    }

    #[test]
    fn unreachable_host_is_request_error() {
        // Port 9 (discard) on localhost is expected to refuse connections.
        let err = transport().get("http://127.0.0.1:9/list.m3u").unwrap_err();
        assert!(matches!(err, FetchError::Request(_)));
    }
}
