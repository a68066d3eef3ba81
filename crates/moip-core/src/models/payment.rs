use serde::{Deserialize, Serialize};

use super::common::{Address, Event, Links, Phone, ResponseAmount, TaxDocument};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    CreditCard,
    Boleto,
    OnlineBankDebit,
    Wallet,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardHolder {
    pub fullname: String,
    pub birthdate: String,
    pub tax_document: TaxDocument,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
}

/// Card data as produced by the checkout JS (`hash`), never the raw PAN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditCard {
    pub hash: String,
    pub holder: CardHolder,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoletoInstructionLines {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub third: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Boleto {
    pub expiration_date: String,
    #[serde(default)]
    pub instruction_lines: BoletoInstructionLines,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnlineBankDebit {
    /// One of `001`, `237`, `341`, `041`.
    pub bank_number: String,
    pub expiration_date: String,
    pub return_uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingInstrument {
    pub method: PaymentMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_card: Option<CreditCard>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boleto: Option<Boleto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub online_bank_debit: Option<OnlineBankDebit>,
}

impl FundingInstrument {
    pub fn credit_card(card: CreditCard) -> Self {
        Self {
            method: PaymentMethod::CreditCard,
            credit_card: Some(card),
            boleto: None,
            online_bank_debit: None,
        }
    }

    pub fn boleto(boleto: Boleto) -> Self {
        Self {
            method: PaymentMethod::Boleto,
            credit_card: None,
            boleto: Some(boleto),
            online_bank_debit: None,
        }
    }

    pub fn online_bank_debit(debit: OnlineBankDebit) -> Self {
        Self {
            method: PaymentMethod::OnlineBankDebit,
            credit_card: None,
            boleto: None,
            online_bank_debit: Some(debit),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installment_count: Option<u32>,
    pub funding_instrument: FundingInstrument,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_capture: Option<bool>,
}

impl Payment {
    pub fn new(funding_instrument: FundingInstrument) -> Self {
        Self {
            installment_count: None,
            funding_instrument,
            delay_capture: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Created,
    Waiting,
    InAnalysis,
    PreAuthorized,
    Authorized,
    Cancelled,
    Refunded,
    Reversed,
    Settled,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeeType {
    Transaction,
    PrePayment,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fee {
    #[serde(rename = "type")]
    pub kind: FeeType,
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub id: String,
    pub status: PaymentStatus,
    #[serde(default)]
    pub amount: ResponseAmount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installment_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_capture: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funding_instrument: Option<FundingInstrument>,
    #[serde(default)]
    pub fees: Vec<Fee>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(rename = "_links", default)]
    pub links: Links,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn boleto_payment_serializes_method_and_instrument() {
        let payment = Payment::new(FundingInstrument::boleto(Boleto {
            expiration_date: String::from("2020-06-20"),
            instruction_lines: BoletoInstructionLines {
                first: Some(String::from("Atenção,")),
                ..BoletoInstructionLines::default()
            },
            logo_uri: None,
            line_code: None,
        }));

        let value = serde_json::to_value(payment).expect("serializes");
        assert_eq!(value["fundingInstrument"]["method"], json!("BOLETO"));
        assert_eq!(
            value["fundingInstrument"]["boleto"]["expirationDate"],
            json!("2020-06-20")
        );
        assert!(value["fundingInstrument"].get("creditCard").is_none());
    }

    #[test]
    fn response_decodes_status_and_fees() {
        let response: PaymentResponse = serde_json::from_value(json!({
            "id": "PAY-HL7QRKFEQNHV",
            "status": "IN_ANALYSIS",
            "amount": {"total": 1000, "fees": 79, "refunds": 0, "liquid": 921, "currency": "BRL"},
            "fees": [{"type": "TRANSACTION", "amount": 79}]
        }))
        .expect("decodes");

        assert_eq!(response.status, PaymentStatus::InAnalysis);
        assert_eq!(response.amount.liquid, 921);
        assert_eq!(response.fees[0].kind, FeeType::Transaction);
    }
}
