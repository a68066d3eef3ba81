//! Request dispatch and response classification.
//!
//! Every API call in this crate goes through [`Dispatcher`]: it builds the URL
//! from the configured base and version segment, attaches the authorization
//! header, performs exactly one transport call and classifies the result into
//! an [`Outcome`].
//!
//! # Classification order
//!
//! | # | Condition | Outcome |
//! |---|-----------|---------|
//! | 1 | response received, status in `200..300` | [`Outcome::Success`] |
//! | 2 | response received, body has a non-empty `errors` array | [`Outcome::Structured`] |
//! | 3 | no response (transport failure) | [`Outcome::Transport`] |
//! | 4 | response received, body has an `ERROR` member | [`Outcome::Structured`] with one `?`/`?` detail |
//! | 5 | anything else | [`Outcome::Unstructured`] |
//!
//! There are no retries and no timeouts. A caller that needs a deadline wraps
//! the returned future (for example with `tokio::time::timeout`).

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::credentials::Credential;
use crate::error::{ApiErrorDetail, ClientError, MoipError};
use crate::http_client::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse};

const EMPTY_BODY: &str = "{}";
const UNKNOWN_FIELD: &str = "?";

/// Per-call overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Replaces the default authorization header entirely. Not merged.
    pub headers: Option<BTreeMap<String, String>>,
    /// Replaces the client's version segment. `Some("")` drops the segment.
    pub version: Option<String>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers = Some(
            headers
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        );
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}

/// Message used for failed responses that carry no recognizable error payload.
///
/// Historical clients disagree here, so both behaviours are available.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FallbackMessage {
    /// Raw response body; the status code when the body is empty.
    #[default]
    BodyOrStatus,
    /// Always the status code.
    Status,
}

/// Classified result of one dispatched call.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(Value),
    Structured(MoipError),
    Transport(HttpError),
    Unstructured { status: u16, message: String },
}

impl Outcome {
    pub fn classify(result: Result<HttpResponse, HttpError>, fallback: FallbackMessage) -> Self {
        let response = match result {
            Ok(response) => response,
            Err(error) => return Self::Transport(error),
        };

        let body = parse_body(&response.body);
        if response.is_success() {
            return Self::Success(body);
        }

        if let Some(errors) = body.get("errors").and_then(Value::as_array) {
            if !errors.is_empty() {
                let details = errors.iter().map(ApiErrorDetail::from_value).collect();
                return Self::Structured(MoipError::new(details, response.status));
            }
        }

        if let Some(description) = free_text_error(&body) {
            let detail = ApiErrorDetail::new(UNKNOWN_FIELD, UNKNOWN_FIELD, description);
            return Self::Structured(MoipError::new(vec![detail], response.status));
        }

        let message = match fallback {
            FallbackMessage::BodyOrStatus if !response.body.trim().is_empty() => response.body,
            FallbackMessage::BodyOrStatus | FallbackMessage::Status => response.status.to_string(),
        };

        Self::Unstructured {
            status: response.status,
            message,
        }
    }

    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn into_result(self) -> Result<Value, ClientError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Structured(error) => Err(ClientError::Api(error)),
            Self::Transport(error) => Err(ClientError::Transport(error)),
            Self::Unstructured { status, message } => {
                Err(ClientError::Unstructured { status, message })
            }
        }
    }
}

/// Lenient JSON body parse: empty bodies become `null`, non-JSON text is kept
/// as a JSON string.
pub fn parse_body(raw: &str) -> Value {
    if raw.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_owned()))
}

fn free_text_error(body: &Value) -> Option<String> {
    match body.get("ERROR")? {
        Value::Null => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

fn version_segment(version: &str) -> String {
    if version.is_empty() || version.starts_with('/') {
        version.to_owned()
    } else {
        format!("/{version}")
    }
}

/// Issues requests against one base URL with one credential.
#[derive(Clone)]
pub struct Dispatcher {
    http_client: Arc<dyn HttpClient>,
    base_url: String,
    version: String,
    credential: Credential,
    diagnostics: bool,
    fallback: FallbackMessage,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("base_url", &self.base_url)
            .field("version", &self.version)
            .field("credential", &self.credential)
            .field("diagnostics", &self.diagnostics)
            .field("fallback", &self.fallback)
            .finish_non_exhaustive()
    }
}

impl Dispatcher {
    pub fn new(
        http_client: Arc<dyn HttpClient>,
        base_url: impl Into<String>,
        version: impl Into<String>,
        credential: Credential,
    ) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
            version: version.into(),
            credential,
            diagnostics: false,
            fallback: FallbackMessage::default(),
        }
    }

    /// Emit `tracing` debug events for every request and response.
    pub fn with_diagnostics(mut self, diagnostics: bool) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn with_fallback(mut self, fallback: FallbackMessage) -> Self {
        self.fallback = fallback;
        self
    }

    /// Same transport, credential and settings against another API root.
    pub fn rebased(&self, base_url: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            version: version.into(),
            ..self.clone()
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// `base + version segment + path`. The path is appended verbatim.
    pub fn url_for(&self, path: &str, version: Option<&str>) -> String {
        let version = version.unwrap_or(&self.version);
        format!("{}{}{}", self.base_url, version_segment(version), path)
    }

    /// Performs one call and returns the classified outcome.
    pub async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<String>,
        options: &RequestOptions,
    ) -> Outcome {
        let url = self.url_for(path, options.version.as_deref());
        let body = body.unwrap_or_else(|| EMPTY_BODY.to_owned());

        let mut request = HttpRequest::new(method, url)
            .with_header("content-type", "application/json")
            .with_header("accept", "application/json");
        request = match &options.headers {
            Some(headers) => request.with_headers(headers.clone()),
            None => request.with_headers(self.credential.headers()),
        };
        let request = request.with_body(body);

        if self.diagnostics {
            tracing::debug!(
                method = %request.method,
                url = %request.url,
                body = request.body.as_deref().unwrap_or_default(),
                "dispatching request"
            );
        }

        let result = self.http_client.execute(request).await;

        if self.diagnostics {
            match &result {
                Ok(response) => tracing::debug!(
                    method = %method,
                    path,
                    status = response.status,
                    body = %response.body,
                    "received response"
                ),
                Err(error) => tracing::debug!(
                    method = %method,
                    path,
                    error = %error,
                    "transport failure"
                ),
            }
        }

        let outcome = Outcome::classify(result, self.fallback);
        if self.diagnostics {
            match &outcome {
                Outcome::Success(_) => {}
                Outcome::Structured(error) => {
                    tracing::warn!(method = %method, path, status = error.status(), "api error")
                }
                Outcome::Transport(error) => {
                    tracing::warn!(method = %method, path, error = %error, "transport error")
                }
                Outcome::Unstructured { status, .. } => {
                    tracing::warn!(method = %method, path, status, "unrecognized error response")
                }
            }
        }
        outcome
    }

    /// Dispatches and decodes the success body into `T`.
    pub async fn request<T, B>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
        options: &RequestOptions,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        let body = body.map(serde_json::to_string).transpose()?;
        let value = self.send(method, path, body, options).await.into_result()?;
        Ok(serde_json::from_value(value)?)
    }

    /// Same as [`Dispatcher::request`] with the verb given as text. Unknown
    /// verbs fail before the transport is touched.
    pub async fn request_verb<T, B>(
        &self,
        verb: &str,
        path: &str,
        body: Option<&B>,
        options: &RequestOptions,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        let method = verb.parse::<HttpMethod>()?;
        self.request(method, path, body, options).await
    }
}
