use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use super::order::OrderResponse;
use super::payment::PaymentResponse;

/// Delivery media for notification preferences. The API only knows webhooks.
pub const WEBHOOK_MEDIA: &str = "WEBHOOK";

macro_rules! webhook_events {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// Event names used by notification preferences and payloads.
        ///
        /// Names the client does not know (including wildcards such as
        /// `ORDER.*`) are kept verbatim in [`WebhookEvent::Other`].
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum WebhookEvent {
            $($variant,)+
            Other(String),
        }

        impl WebhookEvent {
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $name,)+
                    Self::Other(name) => name,
                }
            }
        }

        impl From<String> for WebhookEvent {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $($name => Self::$variant,)+
                    _ => Self::Other(value),
                }
            }
        }
    };
}

webhook_events! {
    OrderCreated => "ORDER.CREATED",
    OrderWaiting => "ORDER.WAITING",
    OrderPaid => "ORDER.PAID",
    OrderNotPaid => "ORDER.NOT_PAID",
    OrderReverted => "ORDER.REVERTED",
    PaymentWaiting => "PAYMENT.WAITING",
    PaymentInAnalysis => "PAYMENT.IN_ANALYSIS",
    PaymentPreAuthorized => "PAYMENT.PRE_AUTHORIZED",
    PaymentAuthorized => "PAYMENT.AUTHORIZED",
    PaymentCancelled => "PAYMENT.CANCELLED",
    PaymentRefunded => "PAYMENT.REFUNDED",
    PaymentReversed => "PAYMENT.REVERSED",
    PaymentSettled => "PAYMENT.SETTLED",
    RefundRequested => "REFUND.REQUESTED",
    RefundCompleted => "REFUND.COMPLETED",
    RefundFailed => "REFUND.FAILED",
    MultiorderCreated => "MULTIORDER.CREATED",
    MultiorderPaid => "MULTIORDER.PAID",
    MultiorderNotPaid => "MULTIORDER.NOT_PAID",
    MultiorderReverted => "MULTIORDER.REVERTED",
    MultipaymentWaiting => "MULTIPAYMENT.WAITING",
    MultipaymentInAnalysis => "MULTIPAYMENT.IN_ANALYSIS",
    MultipaymentAuthorized => "MULTIPAYMENT.AUTHORIZED",
    MultipaymentCancelled => "MULTIPAYMENT.CANCELLED",
    MultipaymentRefunded => "MULTIPAYMENT.REFUNDED",
    EntryScheduled => "ENTRY.SCHEDULED",
    EntrySettled => "ENTRY.SETTLED",
    TransferRequested => "TRANSFER.REQUESTED",
    TransferCompleted => "TRANSFER.COMPLETED",
    TransferFailed => "TRANSFER.FAILED",
}

impl From<&str> for WebhookEvent {
    fn from(value: &str) -> Self {
        Self::from(value.to_owned())
    }
}

impl From<WebhookEvent> for String {
    fn from(value: WebhookEvent) -> Self {
        match value {
            WebhookEvent::Other(name) => name,
            known => known.as_str().to_owned(),
        }
    }
}

impl Display for WebhookEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Notification preference sent to `POST /preferences/notifications`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webhook {
    pub events: Vec<WebhookEvent>,
    pub target: String,
    pub media: String,
}

impl Webhook {
    pub fn new(events: Vec<WebhookEvent>, target: impl Into<String>) -> Self {
        Self {
            events,
            target: target.into(),
            media: String::from(WEBHOOK_MEDIA),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookResponse {
    pub id: String,
    /// Token the gateway sends in the `Authorization` header of each delivery.
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub events: Vec<WebhookEvent>,
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub media: String,
}

/// Body of `POST /webhooks/`: re-deliver notifications for a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResendRequest {
    pub resource_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<WebhookEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResendResponse {
    pub id: String,
    pub resource_id: String,
    pub event: WebhookEvent,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sent_at: Option<String>,
}

/// Payload the gateway POSTs to a registered webhook target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookNotification {
    pub event: WebhookEvent,
    pub resource: NotificationResource,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationResource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<OrderResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment: Option<PaymentResponse>,
}
