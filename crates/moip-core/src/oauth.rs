//! OAuth (marketplace) authorization helpers.
//!
//! The flow is:
//! 1. send the seller to [`authorization_url`],
//! 2. read the `code` back from the redirect with [`OAuthGrant::from_query`],
//! 3. exchange it with `Moip::access_token`,
//! 4. build an `OAuthClient` from the returned token.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::models::MoipAccount;
use crate::ValidationError;

const AUTHORIZATION_CODE_LEN: usize = 32;
pub const GRANT_TYPE_AUTHORIZATION_CODE: &str = "AUTHORIZATION_CODE";

/// Permission requested from the seller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OAuthScope {
    CreateOrders,
    ViewOrders,
    CreatePayments,
    ViewPayments,
    Other(String),
}

impl OAuthScope {
    pub fn as_str(&self) -> &str {
        match self {
            Self::CreateOrders => "CREATE_ORDERS",
            Self::ViewOrders => "VIEW_ORDERS",
            Self::CreatePayments => "CREATE_PAYMENTS",
            Self::ViewPayments => "VIEW_PAYMENTS",
            Self::Other(value) => value,
        }
    }
}

impl From<String> for OAuthScope {
    fn from(value: String) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "CREATE_ORDERS" => Self::CreateOrders,
            "VIEW_ORDERS" => Self::ViewOrders,
            "CREATE_PAYMENTS" => Self::CreatePayments,
            "VIEW_PAYMENTS" => Self::ViewPayments,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for OAuthScope {
    fn from(value: &str) -> Self {
        Self::from(value.to_owned())
    }
}

impl From<OAuthScope> for String {
    fn from(value: OAuthScope) -> Self {
        match value {
            OAuthScope::Other(value) => value,
            known => known.as_str().to_owned(),
        }
    }
}

impl Display for OAuthScope {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Split a scope string on `+`, `|` or space and upper-case each entry.
pub fn parse_scopes(raw: &str) -> Vec<OAuthScope> {
    raw.split(['+', '|', ' '])
        .filter(|part| !part.is_empty())
        .map(|part| OAuthScope::from(part.to_ascii_uppercase()))
        .collect()
}

/// `{host}/oauth/authorize?responseType=CODE&appId=..&redirectUri=..&scope=A|B`
///
/// Only the redirect URI is percent-encoded.
pub fn authorization_url(
    host: &str,
    app_id: &str,
    redirect_uri: &str,
    scopes: &[OAuthScope],
) -> String {
    let scope = scopes
        .iter()
        .map(OAuthScope::as_str)
        .collect::<Vec<_>>()
        .join("|");

    format!(
        "{host}/oauth/authorize?responseType=CODE&appId={app_id}&redirectUri={}&scope={scope}",
        urlencoding::encode(redirect_uri)
    )
}

/// Authorization code and granted scopes read from the OAuth redirect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OAuthGrant {
    pub code: Option<String>,
    pub scope: Vec<OAuthScope>,
}

impl OAuthGrant {
    pub fn new(code: impl Into<String>) -> Result<Self, ValidationError> {
        let code = code.into();
        let len = code.chars().count();
        if len != AUTHORIZATION_CODE_LEN {
            return Err(ValidationError::InvalidAuthorizationCode { len });
        }
        Ok(Self {
            code: Some(code),
            scope: Vec::new(),
        })
    }

    pub fn with_scope(mut self, scope: Vec<OAuthScope>) -> Self {
        self.scope = scope;
        self
    }

    /// Extract from a raw query string such as `?code=...&scope=VIEW_ORDERS`.
    ///
    /// A `code` whose length is not 32 characters is ignored.
    pub fn from_query(query: &str) -> Self {
        let query = query.trim_start_matches('?');
        let pairs = query.split('&').filter_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            let value = urlencoding::decode(value)
                .map(|decoded| decoded.into_owned())
                .unwrap_or_else(|_| value.to_owned());
            Some((key.to_owned(), value))
        });
        Self::from_pairs(pairs)
    }

    /// Same as [`OAuthGrant::from_query`] for already-decoded pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut grant = Self::default();
        for (key, value) in pairs {
            let value = value.as_ref();
            if key.as_ref().eq_ignore_ascii_case("code") {
                if value.chars().count() == AUTHORIZATION_CODE_LEN {
                    grant.code = Some(value.to_owned());
                }
            } else if key.as_ref().eq_ignore_ascii_case("scope") && !value.is_empty() {
                grant.scope = parse_scopes(value);
            }
        }
        grant
    }
}

/// Body of `POST /oauth/accesstoken`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenRequest {
    pub app_id: String,
    pub app_secret: String,
    pub redirect_uri: String,
    pub grant_type: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenResponse {
    #[serde(alias = "access_token")]
    pub access_token: String,
    #[serde(default)]
    pub scope: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moip_account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moip_account: Option<MoipAccount>,
}

impl AccessTokenResponse {
    pub fn scopes(&self) -> Vec<OAuthScope> {
        parse_scopes(&self.scope)
    }

    /// Seller account id, from whichever member the gateway populated.
    pub fn account_id(&self) -> Option<&str> {
        self.moip_account_id
            .as_deref()
            .or_else(|| self.moip_account.as_ref().map(|account| account.id.as_str()))
    }
}
