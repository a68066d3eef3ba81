use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::credentials::Credential;
use crate::dispatch::{Dispatcher, FallbackMessage, RequestOptions};
use crate::environment::Environment;
use crate::error::{ClientError, ValidationError};
use crate::http_client::{HttpClient, HttpMethod, ReqwestHttpClient};
use crate::models::{
    Customer, CustomerResponse, Order, OrderResponse, Payment, PaymentResponse, Webhook,
    WebhookEvent, WebhookResendRequest, WebhookResendResponse, WebhookResponse,
};
use crate::oauth::{
    authorization_url, AccessTokenRequest, AccessTokenResponse, OAuthGrant, OAuthScope,
    GRANT_TYPE_AUTHORIZATION_CODE,
};
use crate::oauth_client::OAuthClient;
use crate::subscriptions::Subscriptions;

pub const API_VERSION: &str = "v2";

/// Configuration for [`Moip`]. Everything is fixed once `build` returns.
pub struct MoipBuilder {
    token: String,
    key: String,
    environment: Environment,
    app_id: Option<String>,
    app_secret: Option<String>,
    http_client: Option<Arc<dyn HttpClient>>,
    diagnostics: bool,
    fallback: FallbackMessage,
}

impl MoipBuilder {
    pub fn new(token: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            key: key.into(),
            environment: Environment::Sandbox,
            app_id: None,
            app_secret: None,
            http_client: None,
            diagnostics: false,
            fallback: FallbackMessage::default(),
        }
    }

    pub fn production(mut self, production: bool) -> Self {
        self.environment = Environment::from_production(production);
        self
    }

    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    pub fn app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = Some(app_id.into());
        self
    }

    pub fn app_secret(mut self, app_secret: impl Into<String>) -> Self {
        self.app_secret = Some(app_secret.into());
        self
    }

    /// Replace the reqwest transport (tests, proxies, custom TLS roots).
    pub fn http_client(mut self, http_client: Arc<dyn HttpClient>) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Log every request and response at `debug` level through `tracing`.
    pub fn diagnostics(mut self, diagnostics: bool) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn fallback_message(mut self, fallback: FallbackMessage) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn build(self) -> Result<Moip, ValidationError> {
        let credential = Credential::basic(&self.token, &self.key)?;
        let http_client = self
            .http_client
            .unwrap_or_else(|| Arc::new(ReqwestHttpClient::new()));

        let dispatcher = Dispatcher::new(
            http_client,
            self.environment.host(),
            API_VERSION,
            credential,
        )
        .with_diagnostics(self.diagnostics)
        .with_fallback(self.fallback);

        Ok(Moip {
            dispatcher: Arc::new(dispatcher),
            environment: self.environment,
            app_id: self.app_id.filter(|value| !value.is_empty()),
            app_secret: self.app_secret.filter(|value| !value.is_empty()),
        })
    }
}

/// Merchant client for the Moip v2 payments API, authenticated with
/// `Basic base64(token:key)`.
///
/// Cheap to clone; clones share the transport.
#[derive(Debug, Clone)]
pub struct Moip {
    dispatcher: Arc<Dispatcher>,
    environment: Environment,
    app_id: Option<String>,
    app_secret: Option<String>,
}

impl Moip {
    /// Client with the default reqwest transport.
    pub fn new(
        token: impl Into<String>,
        key: impl Into<String>,
        production: bool,
    ) -> Result<Self, ValidationError> {
        MoipBuilder::new(token, key).production(production).build()
    }

    pub fn builder(token: impl Into<String>, key: impl Into<String>) -> MoipBuilder {
        MoipBuilder::new(token, key)
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn base_url(&self) -> &str {
        self.dispatcher.base_url()
    }

    pub fn app_id(&self) -> Option<&str> {
        self.app_id.as_deref()
    }

    /// Checkout script URL for the configured environment.
    pub fn js_url(&self) -> &'static str {
        self.environment.checkout_js()
    }

    pub fn dispatcher(&self) -> &Arc<Dispatcher> {
        &self.dispatcher
    }

    /// Raw dispatch for endpoints without a typed wrapper.
    pub async fn request<T, B>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
        options: &RequestOptions,
    ) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        self.dispatcher.request(method, path, body, options).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.dispatcher
            .request(HttpMethod::Get, path, None::<&Value>, &RequestOptions::default())
            .await
    }

    async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        self.dispatcher
            .request(HttpMethod::Post, path, Some(body), &RequestOptions::default())
            .await
    }

    pub async fn create_customer(&self, customer: &Customer) -> Result<CustomerResponse, ClientError> {
        self.post("/customers", customer).await
    }

    pub async fn get_customer(&self, customer_id: &str) -> Result<CustomerResponse, ClientError> {
        self.get(&format!("/customers/{customer_id}")).await
    }

    pub async fn create_order(&self, order: &Order) -> Result<OrderResponse, ClientError> {
        self.post("/orders", order).await
    }

    pub async fn get_order(&self, order_id: &str) -> Result<OrderResponse, ClientError> {
        self.get(&format!("/orders/{order_id}")).await
    }

    pub async fn create_payment(
        &self,
        order_id: &str,
        payment: &Payment,
    ) -> Result<PaymentResponse, ClientError> {
        self.post(&format!("/orders/{order_id}/payments"), payment)
            .await
    }

    pub async fn get_payment(&self, payment_id: &str) -> Result<PaymentResponse, ClientError> {
        self.get(&format!("/payments/{payment_id}")).await
    }

    /// Ask the gateway to re-deliver notifications for `resource_id`.
    pub async fn resend_webhook(
        &self,
        resource_id: &str,
        event: Option<WebhookEvent>,
    ) -> Result<WebhookResendResponse, ClientError> {
        let request = WebhookResendRequest {
            resource_id: resource_id.to_owned(),
            event,
        };
        self.post("/webhooks/", &request).await
    }

    pub async fn set_notification(
        &self,
        events: Vec<WebhookEvent>,
        target: &str,
    ) -> Result<WebhookResponse, ClientError> {
        self.post("/preferences/notifications", &Webhook::new(events, target))
            .await
    }

    pub async fn delete_notification(&self, notification_id: &str) -> Result<Value, ClientError> {
        self.dispatcher
            .request(
                HttpMethod::Delete,
                &format!("/preferences/notifications/{notification_id}"),
                None::<&Value>,
                &RequestOptions::default(),
            )
            .await
    }

    pub async fn get_notifications(&self) -> Result<Vec<WebhookResponse>, ClientError> {
        self.get("/preferences/notifications").await
    }

    /// URL the seller visits to grant this app access. Pure formatting.
    pub fn oauth_url(
        &self,
        redirect_uri: &str,
        scopes: &[OAuthScope],
    ) -> Result<String, ValidationError> {
        let app_id = self.app_id.as_deref().ok_or(ValidationError::MissingAppId)?;
        Ok(authorization_url(
            self.environment.host(),
            app_id,
            redirect_uri,
            scopes,
        ))
    }

    /// Exchange an authorization code for an access token.
    ///
    /// Sent without a version segment and with the merchant credential.
    pub async fn access_token(
        &self,
        grant: &OAuthGrant,
        redirect_uri: &str,
    ) -> Result<AccessTokenResponse, ClientError> {
        let app_id = self.app_id.clone().ok_or(ValidationError::MissingAppId)?;
        let app_secret = self
            .app_secret
            .clone()
            .ok_or(ValidationError::MissingAppSecret)?;
        let code = grant
            .code
            .clone()
            .ok_or(ValidationError::InvalidAuthorizationCode { len: 0 })?;

        let request = AccessTokenRequest {
            app_id,
            app_secret,
            redirect_uri: redirect_uri.to_owned(),
            grant_type: GRANT_TYPE_AUTHORIZATION_CODE.to_owned(),
            code,
        };

        self.dispatcher
            .request(
                HttpMethod::Post,
                "/oauth/accesstoken",
                Some(&request),
                &RequestOptions::new().with_version(""),
            )
            .await
    }

    /// Sub-client for seller-scoped calls, authenticated with `OAuth <token>`.
    pub fn oauth(&self, access_token: &str) -> Result<OAuthClient, ValidationError> {
        OAuthClient::new(Arc::clone(&self.dispatcher), access_token)
    }

    /// Recurring-billing client sharing this client's credential and transport.
    pub fn subscriptions(&self) -> Subscriptions {
        Subscriptions::from_dispatcher(&self.dispatcher, self.environment)
    }
}
