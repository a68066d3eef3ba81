use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::http_client::HttpError;

/// Local validation errors raised before any request leaves the process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid method '{value}', expected one of GET, PUT, DELETE, POST")]
    InvalidMethod { value: String },

    #[error("invalid environment '{value}', expected sandbox or production")]
    InvalidEnvironment { value: String },

    #[error("api token cannot be empty")]
    EmptyToken,
    #[error("api key cannot be empty")]
    EmptyKey,
    #[error("oauth access token cannot be empty")]
    EmptyAccessToken,

    #[error("app id is required to build an oauth authorization url")]
    MissingAppId,
    #[error("app secret is required to exchange an authorization code")]
    MissingAppSecret,
    #[error("authorization code must be 32 characters, got {len}")]
    InvalidAuthorizationCode { len: usize },
}

/// One entry of the gateway's standard error payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub code: String,
    pub path: String,
    pub description: String,
}

impl ApiErrorDetail {
    pub fn new(
        code: impl Into<String>,
        path: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            path: path.into(),
            description: description.into(),
        }
    }

    /// Lenient decode: missing members become empty strings and non-string
    /// members are rendered as JSON text.
    pub fn from_value(value: &Value) -> Self {
        let field = |name: &str| match value.get(name) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
        };

        Self {
            code: field("code"),
            path: field("path"),
            description: field("description"),
        }
    }
}

impl Display for ApiErrorDetail {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]: {}", self.code, self.path, self.description)
    }
}

/// Structured error returned by the gateway: a list of detail triples plus
/// the HTTP status that carried them.
#[derive(Debug, Clone, PartialEq)]
pub struct MoipError {
    errors: Vec<ApiErrorDetail>,
    status: u16,
    raw: Option<Value>,
}

impl MoipError {
    pub fn new(errors: Vec<ApiErrorDetail>, status: u16) -> Self {
        Self {
            errors,
            status,
            raw: None,
        }
    }

    /// Error payload that did not come as a detail list. Rendered verbatim.
    pub fn from_raw(raw: Value, status: u16) -> Self {
        Self {
            errors: Vec::new(),
            status,
            raw: Some(raw),
        }
    }

    pub fn errors(&self) -> &[ApiErrorDetail] {
        &self.errors
    }

    pub const fn status(&self) -> u16 {
        self.status
    }

    pub fn raw(&self) -> Option<&Value> {
        self.raw.as_ref()
    }
}

impl Display for MoipError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.errors.is_empty() {
            return match &self.raw {
                Some(Value::String(text)) => f.write_str(text),
                Some(other) => write!(f, "{other}"),
                None => Ok(()),
            };
        }

        for (index, detail) in self.errors.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{detail}")?;
        }
        Ok(())
    }
}

impl std::error::Error for MoipError {}

/// Error returned by every client call.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Gateway answered with a structured error payload.
    #[error(transparent)]
    Api(#[from] MoipError),

    /// The request never produced a response.
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// Failed response without a recognizable error payload.
    #[error("{message}")]
    Unstructured { status: u16, message: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    pub const fn is_structured(&self) -> bool {
        matches!(self, Self::Api(_))
    }

    /// HTTP status of the failed call, when a response was received.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api(error) => Some(error.status()),
            Self::Unstructured { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn api_errors(&self) -> Option<&[ApiErrorDetail]> {
        match self {
            Self::Api(error) => Some(error.errors()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn single_detail_renders_code_path_description() {
        let error = MoipError::new(vec![ApiErrorDetail::new("C1", "p", "d")], 422);
        assert_eq!(error.to_string(), "C1 [p]: d");
        assert_eq!(error.status(), 422);
    }

    #[test]
    fn multiple_details_are_newline_joined() {
        let error = MoipError::new(
            vec![
                ApiErrorDetail::new("CUS-001", "customer.email", "email is required"),
                ApiErrorDetail::new("CUS-002", "customer.fullname", "fullname is required"),
            ],
            400,
        );

        assert_eq!(
            error.to_string(),
            "CUS-001 [customer.email]: email is required\nCUS-002 [customer.fullname]: fullname is required"
        );
    }

    #[test]
    fn raw_payload_is_rendered_when_no_details() {
        let text = MoipError::from_raw(json!("gateway exploded"), 500);
        assert_eq!(text.to_string(), "gateway exploded");

        let object = MoipError::from_raw(json!({"reason": "x"}), 500);
        assert_eq!(object.to_string(), r#"{"reason":"x"}"#);
    }

    #[test]
    fn lenient_detail_decode_tolerates_missing_and_numeric_members() {
        let detail = ApiErrorDetail::from_value(&json!({"code": 42, "description": "bad"}));
        assert_eq!(detail, ApiErrorDetail::new("42", "", "bad"));
    }

    #[test]
    fn client_error_exposes_status_only_when_response_was_received() {
        let api = ClientError::from(MoipError::new(Vec::new(), 401));
        assert_eq!(api.status(), Some(401));
        assert!(api.is_structured());

        let transport = ClientError::from(HttpError::new("connection refused"));
        assert_eq!(transport.status(), None);
        assert!(!transport.is_structured());
        assert_eq!(transport.to_string(), "connection refused");
    }
}
