use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// HATEOAS link entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hateoas {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_href: Option<String>,
}

/// `_links` object. Nested link groups (e.g. `checkout`) stay as raw JSON.
pub type Links = BTreeMap<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaxDocumentType {
    Cpf,
    Cnpj,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxDocument {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<TaxDocumentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
}

impl TaxDocument {
    pub fn cpf(number: impl Into<String>) -> Self {
        Self {
            kind: Some(TaxDocumentType::Cpf),
            number: Some(number.into()),
        }
    }

    pub fn cnpj(number: impl Into<String>) -> Self {
        Self {
            kind: Some(TaxDocumentType::Cnpj),
            number: Some(number.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phone {
    pub country_code: String,
    pub area_code: String,
    pub number: String,
}

impl Phone {
    /// Brazilian number (country code 55).
    pub fn brazil(area_code: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            country_code: String::from("55"),
            area_code: area_code.into(),
            number: number.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub street_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
    pub district: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtotals {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addition: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<i64>,
}

/// Request-side amount. Values are in centavos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub subtotals: Subtotals,
}

impl Default for Amount {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            subtotals: Subtotals::default(),
        }
    }
}

pub(crate) fn default_currency() -> String {
    String::from("BRL")
}

/// Amount totals reported on payments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseAmount {
    pub total: i64,
    pub fees: i64,
    pub refunds: i64,
    pub liquid: i64,
    pub currency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Event {
    pub created_at: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoipAccount {
    /// Account identifier, e.g. `MPA-1A23BC4D5E6F`.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fullname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiverAmount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentual: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fees: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refunds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
}

/// Split-payment receiver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receiver {
    #[serde(rename = "type")]
    pub kind: String,
    pub moip_account: MoipAccount,
    #[serde(default)]
    pub amount: ReceiverAmount,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Summary {
    pub count: u64,
    pub amount: i64,
}
