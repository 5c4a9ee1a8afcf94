//! Raw HTTP client for the `IGameServersService` interface.
//!
//! This layer is deliberately payload-agnostic: it builds the request URL,
//! injects the API key, executes the call, and unwraps the outer
//! `{"response": ...}` envelope, handing the still-JSON-encoded inner payload
//! back to the caller. Typed decoding happens one layer up, in
//! [`crate::service::GameServersService`], so this client never needs to know
//! the many different shapes the individual Web API methods return.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::value::RawValue;
use thiserror::Error;
use tracing::debug;
use url::form_urlencoded;

/// Base URL of the Steam `IGameServersService` interface.
const BASE_URL: &str = "https://api.steampowered.com/IGameServersService";

/// Version path segment appended to every method.
const API_VERSION: &str = "v1";

/// Errors that can occur when calling the Steam Web API.
#[derive(Debug, Error)]
pub enum GameServersError {
    /// HTTP request failed (connection, DNS, timeout, or body read).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Response body was not valid JSON.
    #[error("failed to decode response envelope: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Trait for raw Steam Web API calls.
///
/// `get` carries parameters in the URL query string; `post` carries them
/// form-encoded in the request body. Both return the raw bytes of the inner
/// `response` payload. Use [`HttpGameServersClient`] for real HTTP calls, or a
/// mock implementation for testing.
#[async_trait]
pub trait GameServersApi: Send + Sync {
    /// Execute a GET request against the named API method.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not valid JSON.
    async fn get(
        &self,
        method: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<u8>, GameServersError>;

    /// Execute a POST request against the named API method.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not valid JSON.
    async fn post(
        &self,
        method: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<u8>, GameServersError>;
}

/// HTTP-based implementation of [`GameServersApi`].
///
/// Holds a shared `reqwest::Client` (safe for concurrent reuse, pooling is the
/// transport's concern), the interface base URL, and the API key. The client
/// carries no mutable state, so one instance can serve any number of
/// concurrent calls.
pub struct HttpGameServersClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpGameServersClient {
    /// Create a client bound to the production Steam Web API host.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), BASE_URL, api_key)
    }

    /// Create a client with a custom transport and base URL (for testing or
    /// custom timeout/pool configuration).
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Build the fully qualified request URL for an API method.
    ///
    /// The API key is always appended to the query string, after any
    /// caller-supplied parameters, so POST bodies never carry the key.
    fn build_url(&self, method: &str, params: &[(&str, &str)]) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        for (name, value) in params {
            query.append_pair(name, value);
        }
        query.append_pair("key", &self.api_key);

        format!(
            "{}/{}/{}?{}",
            self.base_url,
            method,
            API_VERSION,
            query.finish()
        )
    }
}

#[async_trait]
impl GameServersApi for HttpGameServersClient {
    async fn get(
        &self,
        method: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<u8>, GameServersError> {
        let url = self.build_url(method, params);
        debug!(method, "sending GET request");

        let body = self.client.get(&url).send().await?.bytes().await?;
        unwrap_envelope(&body)
    }

    async fn post(
        &self,
        method: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<u8>, GameServersError> {
        // The key rides in the query string; only the caller's parameters go
        // into the form-encoded body.
        let url = self.build_url(method, &[]);
        debug!(method, "sending POST request");

        let body = self
            .client
            .post(&url)
            .form(params)
            .send()
            .await?
            .bytes()
            .await?;
        unwrap_envelope(&body)
    }
}

/// Outer wrapper every Web API response arrives in. Other top-level fields
/// are ignored.
#[derive(Deserialize)]
struct Envelope<'a> {
    #[serde(borrow, default)]
    response: Option<&'a RawValue>,
}

/// Extract the raw `response` payload from a Web API response body.
///
/// The HTTP status is not consulted before this point: Steam error bodies run
/// through the same path and surface as decode errors when they do not parse
/// as JSON. A valid JSON body without a `response` field is not an error and
/// yields an empty payload.
fn unwrap_envelope(body: &[u8]) -> Result<Vec<u8>, GameServersError> {
    let envelope: Envelope<'_> = serde_json::from_slice(body)?;
    Ok(envelope
        .response
        .map(|raw| raw.get().as_bytes().to_vec())
        .unwrap_or_default())
}

#[cfg(any(test, feature = "test-utils"))]
#[allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::missing_const_for_fn,
    clippy::must_use_candidate
)]
pub mod mock {
    //! Mock implementation for unit testing.

    use super::{GameServersApi, GameServersError};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Recorded call: the API method name and the parameters passed.
    pub type RecordedCall = (String, Vec<(String, String)>);

    /// Mock implementation of [`GameServersApi`] for unit tests.
    ///
    /// Configure responses with `set_*_result` methods and verify calls with
    /// `get_calls()` and `post_calls()`. Unseeded calls return an empty
    /// payload.
    pub struct MockGameServersApi {
        get_result: Mutex<Option<Result<Vec<u8>, GameServersError>>>,
        post_result: Mutex<Option<Result<Vec<u8>, GameServersError>>>,
        get_calls: Mutex<Vec<RecordedCall>>,
        post_calls: Mutex<Vec<RecordedCall>>,
    }

    impl MockGameServersApi {
        pub fn new() -> Self {
            Self {
                get_result: Mutex::new(None),
                post_result: Mutex::new(None),
                get_calls: Mutex::new(Vec::new()),
                post_calls: Mutex::new(Vec::new()),
            }
        }

        /// Set the result for the next `get` call.
        pub fn set_get_result(&self, result: Result<Vec<u8>, GameServersError>) {
            *self.get_result.lock().unwrap() = Some(result);
        }

        /// Set the result for the next `post` call.
        pub fn set_post_result(&self, result: Result<Vec<u8>, GameServersError>) {
            *self.post_result.lock().unwrap() = Some(result);
        }

        /// Get all methods and parameters passed to `get`.
        pub fn get_calls(&self) -> Vec<RecordedCall> {
            self.get_calls.lock().unwrap().clone()
        }

        /// Get all methods and parameters passed to `post`.
        pub fn post_calls(&self) -> Vec<RecordedCall> {
            self.post_calls.lock().unwrap().clone()
        }
    }

    impl Default for MockGameServersApi {
        fn default() -> Self {
            Self::new()
        }
    }

    fn record(method: &str, params: &[(&str, &str)]) -> RecordedCall {
        (
            method.to_string(),
            params
                .iter()
                .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
                .collect(),
        )
    }

    #[async_trait]
    impl GameServersApi for MockGameServersApi {
        async fn get(
            &self,
            method: &str,
            params: &[(&str, &str)],
        ) -> Result<Vec<u8>, GameServersError> {
            self.get_calls.lock().unwrap().push(record(method, params));

            self.get_result
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(Vec::new()))
        }

        async fn post(
            &self,
            method: &str,
            params: &[(&str, &str)],
        ) -> Result<Vec<u8>, GameServersError> {
            self.post_calls.lock().unwrap().push(record(method, params));

            self.post_result
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(Vec::new()))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client(key: &str) -> HttpGameServersClient {
        HttpGameServersClient::with_client(reqwest::Client::new(), BASE_URL, key)
    }

    #[test]
    fn build_url_appends_version_and_key() {
        let url = client("secret").build_url("GetAccountList", &[]);
        assert_eq!(
            url,
            "https://api.steampowered.com/IGameServersService/GetAccountList/v1?key=secret"
        );
    }

    #[test]
    fn build_url_encodes_params_before_key() {
        let url = client("k").build_url("SetMemo", &[("steamid", "123"), ("memo", "a b")]);
        assert_eq!(
            url,
            "https://api.steampowered.com/IGameServersService/SetMemo/v1?steamid=123&memo=a+b&key=k"
        );
    }

    #[test]
    fn build_url_percent_encodes_reserved_characters() {
        let url = client("k&=?").build_url("CreateAccount", &[("memo", "x&y=z")]);
        assert!(url.ends_with("/CreateAccount/v1?memo=x%26y%3Dz&key=k%26%3D%3F"));
    }

    #[test]
    fn unwrap_envelope_returns_raw_payload() {
        let payload = unwrap_envelope(br#"{"response": {"a": 1}}"#).unwrap();
        assert_eq!(payload, br#"{"a": 1}"#);
    }

    #[test]
    fn unwrap_envelope_ignores_extra_fields() {
        let payload = unwrap_envelope(br#"{"other": 2, "response": [1, 2]}"#).unwrap();
        assert_eq!(payload, b"[1, 2]");
    }

    #[test]
    fn unwrap_envelope_missing_field_yields_empty_payload() {
        let payload = unwrap_envelope(br#"{"other": 1}"#).unwrap();
        assert!(payload.is_empty());
    }

    #[test]
    fn unwrap_envelope_invalid_json_is_decode_error() {
        let result = unwrap_envelope(b"not json");
        assert!(matches!(result, Err(GameServersError::Decode(_))));
    }

    #[test]
    fn unwrap_envelope_scalar_payload_is_preserved() {
        let payload = unwrap_envelope(br#"{"response": 42}"#).unwrap();
        assert_eq!(payload, b"42");
    }
}
