//! # Moip Core
//!
//! Typed async client for the Moip v2 payment REST API.
//!
//! ## Overview
//!
//! - **Merchant client** ([`Moip`]) for customers, orders, payments and
//!   notification preferences, authenticated with `Basic base64(token:key)`
//! - **OAuth flow** helpers and a seller-scoped [`OAuthClient`] for accounts,
//!   bank accounts and transfers
//! - **Recurring billing** through [`Subscriptions`] (`/assinaturas/v1`)
//! - **One dispatcher** that turns every HTTP exchange into an [`Outcome`]
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Primary client and builder |
//! | [`credentials`] | Authorization header values |
//! | [`dispatch`] | Request dispatch and response classification |
//! | [`environment`] | Sandbox/production hosts |
//! | [`error`] | Error types |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`models`] | Request/response shapes |
//! | [`oauth`] | Authorization URL, grant extraction, token exchange types |
//! | [`oauth_client`] | Seller-scoped client |
//! | [`subscriptions`] | Recurring-billing client |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use moip_core::{Customer, Item, Moip, Order, OrderCustomer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let moip = Moip::new("TOKEN", "KEY", false)?;
//!
//!     let order = Order::new(
//!         "pedido-0001",
//!         vec![Item::new("Camiseta", 1, 2990)],
//!         OrderCustomer::Existing { id: String::from("CUS-7ABC123DEF45") },
//!     );
//!     let created = moip.create_order(&order).await?;
//!     println!("order {} is {:?}", created.id, created.status);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every call returns [`ClientError`]. Gateway-reported problems arrive as
//! [`MoipError`] with `(code, path, description)` details:
//!
//! ```rust
//! use moip_core::ClientError;
//!
//! fn report(error: &ClientError) {
//!     match error.api_errors() {
//!         Some(details) => {
//!             for detail in details {
//!                 eprintln!("{} at {}: {}", detail.code, detail.path, detail.description);
//!             }
//!         }
//!         None => eprintln!("request failed: {error}"),
//!     }
//! }
//! ```
//!
//! ## Logging
//!
//! With `MoipBuilder::diagnostics(true)` the dispatcher emits `tracing`
//! events for each request and response. Authorization headers are never
//! logged. The library does not install a subscriber.

pub mod client;
pub mod credentials;
pub mod dispatch;
pub mod environment;
pub mod error;
pub mod http_client;
pub mod models;
pub mod oauth;
pub mod oauth_client;
pub mod subscriptions;

#[cfg(test)]
mod testing;

// Clients
pub use client::{Moip, MoipBuilder, API_VERSION};
pub use oauth_client::OAuthClient;
pub use subscriptions::{Subscriptions, SUBSCRIPTIONS_API_VERSION};

// Dispatch
pub use dispatch::{Dispatcher, FallbackMessage, Outcome, RequestOptions};

// Configuration
pub use credentials::Credential;
pub use environment::{Environment, PRODUCTION_HOST, SANDBOX_HOST};

// Error types
pub use error::{ApiErrorDetail, ClientError, MoipError, ValidationError};

// HTTP client types
pub use http_client::{HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, ReqwestHttpClient};

// OAuth
pub use oauth::{
    authorization_url, parse_scopes, AccessTokenRequest, AccessTokenResponse, OAuthGrant,
    OAuthScope,
};

// Models
pub use models::*;
