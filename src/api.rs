//! SpaceX REST API client
//!
//! Thin fetch layer over the public v4 API: one GET per call, a bounded
//! request timeout, and a typed error for every way the exchange can go
//! wrong. Retry policy belongs to callers; this client never retries.

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Base URL for the SpaceX v4 API
const SPACEX_BASE_URL: &str = "https://api.spacexdata.com/v4";

/// Upper bound on a single request; a hung remote must not hang the caller
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors that can occur when fetching from the API
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be sent or timed out
    #[error("request to '{endpoint}' failed: {source}")]
    Request {
        endpoint: String,
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("endpoint '{endpoint}' returned status {status}")]
    Status {
        endpoint: String,
        status: StatusCode,
    },

    /// The response body was not valid JSON
    #[error("failed to decode '{endpoint}' response: {source}")]
    Decode {
        endpoint: String,
        source: reqwest::Error,
    },

    /// The response parsed but was not the expected JSON array
    #[error("unexpected response shape for '{endpoint}': expected a JSON array")]
    UnexpectedShape { endpoint: String },
}

/// Client for the SpaceX data API
#[derive(Debug, Clone)]
pub struct SpaceXClient {
    client: Client,
    base_url: String,
}

impl Default for SpaceXClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SpaceXClient {
    /// Creates a client against the public API.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: SPACEX_BASE_URL.to_string(),
        }
    }

    /// Creates a client against a custom base URL (for testing).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Full URL for an endpoint name.
    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    /// Fetches an endpoint and returns its records.
    ///
    /// # Arguments
    /// * `endpoint` - API endpoint name (e.g. "launches")
    ///
    /// # Returns
    /// * `Ok(Vec<Value>)` - The JSON array the endpoint responded with
    /// * `Err(FetchError)` - Transport, status, decode, or shape failure
    pub fn fetch(&self, endpoint: &str) -> Result<Vec<Value>, FetchError> {
        let url = self.endpoint_url(endpoint);

        let response = self
            .client
            .get(&url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .map_err(|source| FetchError::Request {
                endpoint: endpoint.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                endpoint: endpoint.to_string(),
                status,
            });
        }

        let body: Value = response.json().map_err(|source| FetchError::Decode {
            endpoint: endpoint.to_string(),
            source,
        })?;

        match body {
            Value::Array(records) => Ok(records),
            _ => Err(FetchError::UnexpectedShape {
                endpoint: endpoint.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_joins_base_and_name() {
        let client = SpaceXClient::with_base_url("http://localhost:8080/v4");
        assert_eq!(
            client.endpoint_url("launches"),
            "http://localhost:8080/v4/launches"
        );
    }

    #[test]
    fn default_client_targets_public_api() {
        let client = SpaceXClient::new();
        assert_eq!(
            client.endpoint_url("rockets"),
            "https://api.spacexdata.com/v4/rockets"
        );
    }

    #[test]
    fn status_error_names_endpoint_and_code() {
        let err = FetchError::Status {
            endpoint: "launchpads".to_string(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };
        let message = err.to_string();
        assert!(message.contains("launchpads"));
        assert!(message.contains("500"));
    }

    #[test]
    fn shape_error_names_endpoint() {
        let err = FetchError::UnexpectedShape {
            endpoint: "rockets".to_string(),
        };
        assert!(err.to_string().contains("rockets"));
        assert!(err.to_string().contains("array"));
    }

    #[test]
    fn fetch_against_unroutable_host_is_a_request_error() {
        // Port 0 is never listening; the send itself must fail
        let client = SpaceXClient::with_base_url("http://127.0.0.1:0/v4");
        match client.fetch("launches") {
            Err(FetchError::Request { endpoint, .. }) => assert_eq!(endpoint, "launches"),
            other => panic!("expected a request error, got {:?}", other.map(|v| v.len())),
        }
    }
}
