use std::fmt::{Debug, Formatter};

use base64::engine::general_purpose::STANDARD as BASE64_ENGINE;
use base64::Engine;

use crate::ValidationError;

pub const AUTHORIZATION_HEADER: &str = "authorization";

/// Authorization value attached to every dispatched request.
///
/// The header string is computed once at construction and never changes.
/// `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// `Basic base64(token:key)`, used by the merchant client.
    Basic(String),
    /// `OAuth <access token>`, used by the OAuth sub-client.
    OAuth(String),
}

impl Credential {
    pub fn basic(token: &str, key: &str) -> Result<Self, ValidationError> {
        if token.trim().is_empty() {
            return Err(ValidationError::EmptyToken);
        }
        if key.trim().is_empty() {
            return Err(ValidationError::EmptyKey);
        }

        let encoded = BASE64_ENGINE.encode(format!("{token}:{key}"));
        Ok(Self::Basic(format!("Basic {encoded}")))
    }

    pub fn oauth(access_token: &str) -> Result<Self, ValidationError> {
        if access_token.trim().is_empty() {
            return Err(ValidationError::EmptyAccessToken);
        }
        Ok(Self::OAuth(format!("OAuth {access_token}")))
    }

    pub fn header_value(&self) -> &str {
        match self {
            Self::Basic(value) | Self::OAuth(value) => value,
        }
    }

    /// Single-entry header map, suitable as a request header override.
    pub fn headers(&self) -> Vec<(String, String)> {
        vec![(
            AUTHORIZATION_HEADER.to_owned(),
            self.header_value().to_owned(),
        )]
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Basic(_) => f.write_str("Credential::Basic(***)"),
            Self::OAuth(_) => f.write_str("Credential::OAuth(***)"),
        }
    }
}
