use serde::{Deserialize, Serialize};

use super::bank_account::BankAccount;
use super::common::{Links, MoipAccount};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransferMethod {
    BankAccount,
    MoipAccount,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferInstrument {
    pub method: TransferMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<BankAccount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moip_account: Option<MoipAccount>,
}

/// Outgoing transfer. `amount` is in centavos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    pub amount: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub transfer_instrument: TransferInstrument,
}

impl Transfer {
    pub fn to_bank_account(amount: i64, bank_account: BankAccount) -> Self {
        Self {
            amount,
            description: None,
            transfer_instrument: TransferInstrument {
                method: TransferMethod::BankAccount,
                bank_account: Some(bank_account),
                moip_account: None,
            },
        }
    }

    pub fn to_moip_account(amount: i64, account_id: impl Into<String>) -> Self {
        Self {
            amount,
            description: None,
            transfer_instrument: TransferInstrument {
                method: TransferMethod::MoipAccount,
                bank_account: None,
                moip_account: Some(MoipAccount {
                    id: account_id.into(),
                    ..MoipAccount::default()
                }),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransferStatus {
    Requested,
    Completed,
    Failed,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferResponse {
    pub id: String,
    #[serde(default)]
    pub fee: i64,
    pub status: TransferStatus,
    #[serde(flatten)]
    pub transfer: Transfer,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn moip_account_transfer_only_sends_account_id() {
        let value = serde_json::to_value(Transfer::to_moip_account(500, "MPA-123")).expect("serializes");
        assert_eq!(
            value,
            json!({
                "amount": 500,
                "transferInstrument": {
                    "method": "MOIP_ACCOUNT",
                    "moipAccount": {"id": "MPA-123"}
                }
            })
        );
    }
}
