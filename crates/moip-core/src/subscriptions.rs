//! Client for the recurring-billing API (`/assinaturas/v1`).
//!
//! Same credential, transport and classification rules as the payments API.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::dispatch::{Dispatcher, RequestOptions};
use crate::environment::Environment;
use crate::error::ClientError;
use crate::http_client::HttpMethod;
use crate::models::{
    BillingInfo, Invoice, InvoicePaymentsResponse, InvoicesResponse, Plan, PlansResponse,
    Subscriber, SubscribersResponse, Subscription, SubscriptionsResponse,
};

pub const SUBSCRIPTIONS_API_VERSION: &str = "v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubscriptionAction {
    Suspend,
    Activate,
    Cancel,
}

impl SubscriptionAction {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Suspend => "suspend",
            Self::Activate => "activate",
            Self::Cancel => "cancel",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Subscriptions {
    dispatcher: Arc<Dispatcher>,
}

impl Subscriptions {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// Derive from the payments dispatcher by switching root and version.
    pub fn from_dispatcher(dispatcher: &Dispatcher, environment: Environment) -> Self {
        Self::new(Arc::new(dispatcher.rebased(
            environment.subscriptions_host(),
            SUBSCRIPTIONS_API_VERSION,
        )))
    }

    pub fn base_url(&self) -> &str {
        self.dispatcher.base_url()
    }

    async fn call<T, B>(&self, method: HttpMethod, path: &str, body: Option<&B>) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        self.dispatcher
            .request(method, path, body, &RequestOptions::default())
            .await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.call(HttpMethod::Get, path, None::<&Value>).await
    }

    async fn put_empty(&self, path: &str) -> Result<Value, ClientError> {
        self.call(HttpMethod::Put, path, None::<&Value>).await
    }

    pub async fn create_plan(&self, plan: &Plan) -> Result<Value, ClientError> {
        self.call(HttpMethod::Post, "/plans", Some(plan)).await
    }

    pub async fn get_plans(&self) -> Result<PlansResponse, ClientError> {
        self.get("/plans").await
    }

    pub async fn get_plan(&self, plan_code: &str) -> Result<Plan, ClientError> {
        self.get(&format!("/plans/{plan_code}")).await
    }

    pub async fn activate_plan(&self, plan_code: &str) -> Result<Value, ClientError> {
        self.put_empty(&format!("/plans/{plan_code}/activate")).await
    }

    pub async fn inactivate_plan(&self, plan_code: &str) -> Result<Value, ClientError> {
        self.put_empty(&format!("/plans/{plan_code}/inactivate")).await
    }

    pub async fn update_plan(&self, plan_code: &str, plan: &Plan) -> Result<Value, ClientError> {
        self.call(HttpMethod::Put, &format!("/plans/{plan_code}"), Some(plan))
            .await
    }

    /// `new_vault` stores the customer's card in the gateway vault.
    pub async fn create_customer(
        &self,
        customer: &Subscriber,
        new_vault: bool,
    ) -> Result<Value, ClientError> {
        self.call(
            HttpMethod::Post,
            &format!("/customers?new_vault={new_vault}"),
            Some(customer),
        )
        .await
    }

    pub async fn get_customers(&self) -> Result<SubscribersResponse, ClientError> {
        self.get("/customers").await
    }

    pub async fn get_customer(&self, customer_code: &str) -> Result<Subscriber, ClientError> {
        self.get(&format!("/customers/{customer_code}")).await
    }

    pub async fn update_customer(
        &self,
        customer_code: &str,
        customer: &Subscriber,
    ) -> Result<Value, ClientError> {
        self.call(
            HttpMethod::Put,
            &format!("/customers/{customer_code}"),
            Some(customer),
        )
        .await
    }

    pub async fn update_customer_billing(
        &self,
        customer_code: &str,
        billing: &BillingInfo,
    ) -> Result<Value, ClientError> {
        self.call(
            HttpMethod::Put,
            &format!("/customers/{customer_code}/billing_infos"),
            Some(billing),
        )
        .await
    }

    /// `new_customer` creates the embedded customer in the same call.
    pub async fn create_subscription(
        &self,
        subscription: &Subscription,
        new_customer: bool,
    ) -> Result<Subscription, ClientError> {
        self.call(
            HttpMethod::Post,
            &format!("/subscriptions?new_customer={new_customer}"),
            Some(subscription),
        )
        .await
    }

    pub async fn get_subscriptions(&self) -> Result<SubscriptionsResponse, ClientError> {
        self.get("/subscriptions").await
    }

    pub async fn get_subscription(&self, subscription_code: &str) -> Result<Subscription, ClientError> {
        self.get(&format!("/subscriptions/{subscription_code}")).await
    }

    async fn transition(
        &self,
        subscription_code: &str,
        action: SubscriptionAction,
    ) -> Result<Value, ClientError> {
        self.put_empty(&format!(
            "/subscriptions/{subscription_code}/{}",
            action.as_str()
        ))
        .await
    }

    pub async fn suspend_subscription(&self, subscription_code: &str) -> Result<Value, ClientError> {
        self.transition(subscription_code, SubscriptionAction::Suspend)
            .await
    }

    pub async fn activate_subscription(&self, subscription_code: &str) -> Result<Value, ClientError> {
        self.transition(subscription_code, SubscriptionAction::Activate)
            .await
    }

    pub async fn cancel_subscription(&self, subscription_code: &str) -> Result<Value, ClientError> {
        self.transition(subscription_code, SubscriptionAction::Cancel)
            .await
    }

    pub async fn update_subscription(
        &self,
        subscription_code: &str,
        subscription: &Subscription,
    ) -> Result<Value, ClientError> {
        self.call(
            HttpMethod::Put,
            &format!("/subscriptions/{subscription_code}"),
            Some(subscription),
        )
        .await
    }

    pub async fn get_subscription_invoices(
        &self,
        subscription_code: &str,
    ) -> Result<InvoicesResponse, ClientError> {
        self.get(&format!("/subscriptions/{subscription_code}/invoices"))
            .await
    }

    pub async fn get_invoice(&self, invoice_id: &str) -> Result<Invoice, ClientError> {
        self.get(&format!("/invoices/{invoice_id}")).await
    }

    pub async fn get_invoice_payments(
        &self,
        invoice_id: &str,
    ) -> Result<InvoicePaymentsResponse, ClientError> {
        self.get(&format!("/invoices/{invoice_id}/payments")).await
    }

    pub async fn get_payment(&self, payment_id: &str) -> Result<Value, ClientError> {
        self.get(&format!("/payments/{payment_id}")).await
    }
}
