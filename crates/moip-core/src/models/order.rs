use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{Address, Amount, Event, Links, Receiver, Subtotals};
use super::customer::Customer;

/// Line item. `price` is in centavos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub product: String,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub price: i64,
}

impl Item {
    pub fn new(product: impl Into<String>, quantity: u32, price: i64) -> Self {
        Self {
            product: product.into(),
            quantity,
            detail: None,
            price,
        }
    }
}

/// Either a reference to an existing customer or an inline customer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderCustomer {
    New(Box<Customer>),
    Existing { id: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub own_id: String,
    #[serde(default)]
    pub amount: Amount,
    pub items: Vec<Item>,
    pub customer: OrderCustomer,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub receivers: Vec<Receiver>,
}

impl Order {
    pub fn new(own_id: impl Into<String>, items: Vec<Item>, customer: OrderCustomer) -> Self {
        Self {
            own_id: own_id.into(),
            amount: Amount::default(),
            items,
            customer,
            receivers: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Created,
    Waiting,
    Paid,
    NotPaid,
    Reverted,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderAmount {
    pub currency: String,
    pub subtotals: Subtotals,
    pub total: i64,
    pub fees: i64,
    pub refunds: i64,
    pub liquid: i64,
    pub other_receivers: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: String,
    #[serde(default)]
    pub own_id: String,
    pub status: OrderStatus,
    #[serde(default)]
    pub amount: OrderAmount,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub customer: Value,
    #[serde(default)]
    pub payments: Vec<Value>,
    #[serde(default)]
    pub refunds: Vec<Value>,
    #[serde(default)]
    pub entries: Vec<Value>,
    #[serde(default)]
    pub receivers: Vec<Receiver>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
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
    fn existing_customer_serializes_as_id_reference() {
        let order = Order {
            own_id: String::from("order-1"),
            amount: Amount::default(),
            items: vec![Item::new("Bicicleta", 1, 150_000)],
            customer: OrderCustomer::Existing {
                id: String::from("CUS-Q3BL0CAJ2G33"),
            },
            receivers: Vec::new(),
        };

        let value = serde_json::to_value(order).expect("serializes");
        assert_eq!(value["customer"], json!({"id": "CUS-Q3BL0CAJ2G33"}));
        assert_eq!(value["items"][0]["price"], json!(150_000));
        assert!(value.get("receivers").is_none());
    }

    #[test]
    fn unknown_status_does_not_break_decode() {
        let response: OrderResponse = serde_json::from_value(json!({
            "id": "ORD-1",
            "status": "SOMETHING_NEW"
        }))
        .expect("decodes");
        assert_eq!(response.status, OrderStatus::Unknown);
    }

    #[test]
    fn not_paid_uses_screaming_snake_case() {
        let status: OrderStatus = serde_json::from_value(json!("NOT_PAID")).expect("decodes");
        assert_eq!(status, OrderStatus::NotPaid);
    }
}
