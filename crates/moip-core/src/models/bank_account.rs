use serde::{Deserialize, Serialize};

use super::common::{Links, Summary, TaxDocument};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BankAccountType {
    Checking,
    Saving,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccountHolder {
    pub fullname: String,
    pub tax_document: TaxDocument,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    #[serde(rename = "type")]
    pub kind: BankAccountType,
    pub bank_number: String,
    pub agency_number: u64,
    /// Agency check digit.
    pub agency_check_number: u64,
    pub account_number: u64,
    /// Account check digit.
    pub account_check_number: u64,
    pub holder: BankAccountHolder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BankAccountStatus {
    NotVerified,
    InVerification,
    Verified,
    Invalid,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccountResponse {
    pub id: String,
    #[serde(default)]
    pub bank_name: String,
    pub status: BankAccountStatus,
    #[serde(flatten)]
    pub bank_account: BankAccount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccountsResponse {
    #[serde(default)]
    pub summary: Summary,
    #[serde(default)]
    pub bank_accounts: Vec<BankAccountResponse>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}
