use serde::{Deserialize, Serialize};

use super::common::{Address, Links, Phone, TaxDocument};

/// Buyer record, sent to `POST /customers` or inlined into an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Merchant-side identifier.
    pub own_id: String,
    pub fullname: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub tax_document: TaxDocument,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
}

impl Customer {
    pub fn new(
        own_id: impl Into<String>,
        fullname: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            own_id: own_id.into(),
            fullname: fullname.into(),
            email: email.into(),
            birth_date: None,
            tax_document: TaxDocument::default(),
            phone: None,
            shipping_address: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    #[serde(flatten)]
    pub customer: Customer,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}
