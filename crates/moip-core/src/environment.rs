use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

pub const SANDBOX_HOST: &str = "https://sandbox.moip.com.br";
pub const PRODUCTION_HOST: &str = "https://api.moip.com.br";

const SUBSCRIPTIONS_SUFFIX: &str = "/assinaturas";
const CHECKOUT_JS: &str = "//assets.moip.com.br/v2/moip.min.js";

/// Gateway environment. Fixed for the lifetime of a client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Sandbox,
    Production,
}

impl Environment {
    pub const fn from_production(production: bool) -> Self {
        if production {
            Self::Production
        } else {
            Self::Sandbox
        }
    }

    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sandbox => "sandbox",
            Self::Production => "production",
        }
    }

    /// Base URL of the payments API (no version segment).
    pub const fn host(self) -> &'static str {
        match self {
            Self::Sandbox => SANDBOX_HOST,
            Self::Production => PRODUCTION_HOST,
        }
    }

    /// Base URL of the recurring-billing API.
    pub fn subscriptions_host(self) -> String {
        format!("{}{SUBSCRIPTIONS_SUFFIX}", self.host())
    }

    /// Checkout script used for client-side card hashing.
    pub const fn checkout_js(self) -> &'static str {
        // Same asset in both environments.
        match self {
            Self::Sandbox | Self::Production => CHECKOUT_JS,
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sandbox" => Ok(Self::Sandbox),
            "production" => Ok(Self::Production),
            other => Err(ValidationError::InvalidEnvironment {
                value: other.to_owned(),
            }),
        }
    }
}
