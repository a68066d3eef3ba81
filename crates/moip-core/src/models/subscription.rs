//! Recurring-billing ("assinaturas") API shapes.
//!
//! Unlike the payments API these use snake_case members.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IntervalUnit {
    Day,
    Month,
    Year,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanInterval {
    pub length: u32,
    pub unit: IntervalUnit,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Trial {
    pub days: u32,
    pub enabled: bool,
    pub hold_setup_fee: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillingMethod {
    CreditCard,
    Boleto,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PlanStatus {
    Active,
    Inactive,
    #[serde(other)]
    Unknown,
}

/// Amounts are in centavos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub code: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub amount: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setup_fee: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_qty: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<PlanInterval>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_cycles: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trial: Option<Trial>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<BillingMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PlanStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlansResponse {
    #[serde(default)]
    pub plans: Vec<Plan>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriberAddress {
    pub street: String,
    pub number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
    pub district: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zipcode: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingCard {
    pub holder_name: String,
    pub number: String,
    pub expiration_month: String,
    pub expiration_year: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingInfo {
    pub credit_card: BillingCard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscriber {
    pub code: String,
    pub email: String,
    pub fullname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_area_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthdate_day: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthdate_month: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthdate_year: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<SubscriberAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_info: Option<BillingInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscribersResponse {
    #[serde(default)]
    pub customers: Vec<Subscriber>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeRef {
    pub code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SubscriptionStatus {
    Active,
    Suspended,
    Expired,
    Overdue,
    Canceled,
    Trial,
    #[serde(other)]
    Unknown,
}

/// A customer's subscription to a plan. `customer` is either a `{code}`
/// reference or, when creating with `new_customer=true`, a full subscriber.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<BillingMethod>,
    pub plan: CodeRef,
    pub customer: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<SubscriptionStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_invoice_date: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionsResponse {
    #[serde(default)]
    pub subscriptions: Vec<Subscription>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceStatus {
    pub code: i64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: i64,
    #[serde(default)]
    pub amount: i64,
    #[serde(default)]
    pub subscription_code: String,
    #[serde(default)]
    pub occurrence: u32,
    #[serde(default)]
    pub status: InvoiceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoicesResponse {
    #[serde(default)]
    pub invoices: Vec<Invoice>,
}

/// Charge attempts on an invoice. Shape varies by payment method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoicePaymentsResponse {
    #[serde(default)]
    pub payments: Vec<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plan_uses_snake_case_members() {
        let plan = Plan {
            code: String::from("plan101"),
            name: String::from("Plano Especial"),
            description: None,
            amount: 990,
            setup_fee: Some(500),
            max_qty: None,
            interval: Some(PlanInterval {
                length: 1,
                unit: IntervalUnit::Month,
            }),
            billing_cycles: Some(12),
            trial: None,
            payment_method: Some(BillingMethod::CreditCard),
            status: None,
        };

        let value = serde_json::to_value(plan).expect("serializes");
        assert_eq!(value["setup_fee"], json!(500));
        assert_eq!(value["billing_cycles"], json!(12));
        assert_eq!(value["interval"], json!({"length": 1, "unit": "MONTH"}));
        assert_eq!(value["payment_method"], json!("CREDIT_CARD"));
    }

    #[test]
    fn invoice_decodes_nested_status() {
        let invoice: Invoice = serde_json::from_value(json!({
            "id": 13,
            "amount": 101,
            "subscription_code": "assinatura7",
            "occurrence": 1,
            "status": {"code": 2, "description": "Aguardando confirmação"}
        }))
        .expect("decodes");

        assert_eq!(invoice.status.code, 2);
        assert_eq!(invoice.subscription_code, "assinatura7");
    }
}
