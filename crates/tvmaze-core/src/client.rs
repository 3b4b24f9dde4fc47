//! HTTP client for the TVMaze API
//!
//! Thin wrapper around reqwest that resolves API paths against the configured
//! root and maps HTTP status codes onto `TvMazeError`. Each call issues
//! exactly one request: no retries, no throttling.

use crate::config::TvMazeConfig;
use crate::error::{Result, TvMazeError};

/// HTTP client for the TVMaze API
pub struct TvMazeClient {
    /// Underlying HTTP client
    client: reqwest::Client,
    /// API root without trailing slash
    base_url: String,
}

impl TvMazeClient {
    /// Create a new client with default configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(&TvMazeConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be created
    pub fn with_config(config: &TvMazeConfig) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    reqwest::header::ACCEPT,
                    reqwest::header::HeaderValue::from_static("application/json"),
                );
                headers
            })
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_root().to_string(),
        })
    }

    /// API root this client resolves paths against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve an API path (e.g. "/shows/1/episodes") to a full URL
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch the body of an API path as text
    ///
    /// # Arguments
    /// * `path` - Path relative to the API root, including any query string
    ///
    /// # Errors
    /// - `TvMazeError::NotFound` - Server returned 404
    /// - `TvMazeError::Network` - Transport failure or any other non-success status
    pub async fn fetch(&self, path: &str) -> Result<String> {
        let url = self.url_for(path);
        tracing::debug!(%url, "GET");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(TvMazeError::NotFound(url));
        }

        let response = response.error_for_status()?;
        let body = response.text().await?;
        tracing::debug!(%url, %status, bytes = body.len(), "response received");

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = TvMazeClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_default_base_url() {
        let client = TvMazeClient::new().unwrap();
        assert_eq!(client.base_url(), "https://api.tvmaze.com");
    }

    #[test]
    fn test_client_with_custom_config() {
        let config = TvMazeConfig {
            base_url: "http://localhost:9000/".to_string(),
            timeout_secs: 5,
            ..Default::default()
        };
        let client = TvMazeClient::with_config(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9000");
    }

    #[test]
    fn test_client_rejects_invalid_config() {
        let config = TvMazeConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(matches!(
            TvMazeClient::with_config(&config),
            Err(TvMazeError::Config(_))
        ));
    }

    #[test]
    fn test_url_for() {
        let client = TvMazeClient::new().unwrap();
        assert_eq!(
            client.url_for("/shows/1/episodes"),
            "https://api.tvmaze.com/shows/1/episodes"
        );
    }
}
