//! CLI argument definitions for `moip`.
//!
//! # Global Options
//!
//! | Option | Env | Description |
//! |--------|-----|-------------|
//! | `--token` | `MOIP_TOKEN` | Merchant API token |
//! | `--key` | `MOIP_KEY` | Merchant API key |
//! | `--production` | `MOIP_PRODUCTION` | Use the production host instead of sandbox |
//! | `--app-id` | `MOIP_APP_ID` | OAuth application id |
//! | `--app-secret` | `MOIP_APP_SECRET` | OAuth application secret |
//! | `--pretty` | | Pretty-print JSON output |
//! | `--debug` | | Log every request/response at debug level |
//!
//! # Examples
//!
//! ```bash
//! moip order get ORD-1A2B3C4D5E6F
//! moip notifications create --target https://shop.example/hooks --event ORDER.PAID
//! moip oauth url --redirect-uri https://shop.example/cb --scope VIEW_ORDERS
//! MOIP_ACCESS_TOKEN=... moip bank-accounts list MPA-1A23BC4D5E6F
//! ```

use clap::{Args, Parser, Subcommand};

/// Command-line client for the Moip payments API.
#[derive(Debug, Parser)]
#[command(name = "moip", author, version, about = "Command-line client for the Moip payments API")]
pub struct Cli {
    /// Merchant API token.
    #[arg(long, global = true, env = "MOIP_TOKEN", hide_env_values = true, default_value = "")]
    pub token: String,

    /// Merchant API key.
    #[arg(long, global = true, env = "MOIP_KEY", hide_env_values = true, default_value = "")]
    pub key: String,

    /// Talk to the production host instead of the sandbox.
    #[arg(long, global = true, env = "MOIP_PRODUCTION", default_value_t = false)]
    pub production: bool,

    /// OAuth application id (`APP-...`).
    #[arg(long, global = true, env = "MOIP_APP_ID")]
    pub app_id: Option<String>,

    /// OAuth application secret.
    #[arg(long, global = true, env = "MOIP_APP_SECRET", hide_env_values = true)]
    pub app_secret: Option<String>,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Log every request and response (credentials excluded).
    #[arg(long, global = true, default_value_t = false)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Customers of the merchant account.
    #[command(subcommand)]
    Customer(ResourceCommand),

    /// Orders.
    #[command(subcommand)]
    Order(ResourceCommand),

    /// Payments.
    #[command(subcommand)]
    Payment(ResourceCommand),

    /// Notification preferences (webhook targets).
    #[command(subcommand)]
    Notifications(NotificationsCommand),

    /// Ask the gateway to re-deliver webhooks for a resource.
    ResendWebhook(ResendWebhookArgs),

    /// OAuth authorization flow.
    #[command(subcommand)]
    Oauth(OAuthCommand),

    /// Seller bank accounts (requires an OAuth access token).
    #[command(subcommand)]
    BankAccounts(BankAccountsCommand),

    /// Recurring billing.
    #[command(subcommand)]
    Subscriptions(SubscriptionsCommand),

    /// Send a raw request, e.g. `moip request GET /orders/ORD-1`.
    Request(RawRequestArgs),
}

#[derive(Debug, Subcommand)]
pub enum ResourceCommand {
    /// Fetch one resource by id.
    Get { id: String },
}

#[derive(Debug, Subcommand)]
pub enum NotificationsCommand {
    /// List registered notification preferences.
    List,
    /// Register a target for one or more events.
    Create(CreateNotificationArgs),
    /// Remove a notification preference.
    Delete { id: String },
}

#[derive(Debug, Args)]
pub struct CreateNotificationArgs {
    /// Webhook target URL.
    #[arg(long)]
    pub target: String,

    /// Event names, e.g. `ORDER.PAID` or `PAYMENT.*`.
    #[arg(long = "event", required = true, num_args = 1..)]
    pub events: Vec<String>,
}

#[derive(Debug, Args)]
pub struct ResendWebhookArgs {
    /// Order or payment id.
    pub resource_id: String,

    /// Restrict to one event.
    #[arg(long)]
    pub event: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum OAuthCommand {
    /// Print the authorization URL for a seller.
    Url(OAuthUrlArgs),
    /// Exchange the code from a redirect for an access token.
    Token(OAuthTokenArgs),
    /// Fetch a seller account with an access token.
    Account(AccountArgs),
}

#[derive(Debug, Args)]
pub struct OAuthUrlArgs {
    #[arg(long)]
    pub redirect_uri: String,

    /// Requested scopes; repeat or separate with `|`.
    #[arg(long = "scope", required = true, num_args = 1..)]
    pub scopes: Vec<String>,
}

#[derive(Debug, Args)]
pub struct OAuthTokenArgs {
    #[arg(long)]
    pub redirect_uri: String,

    /// Query string of the redirect, e.g. `?code=...&scope=...`.
    #[arg(long)]
    pub query: String,
}

#[derive(Debug, Args)]
pub struct AccessTokenArg {
    /// Seller access token.
    #[arg(long, env = "MOIP_ACCESS_TOKEN", hide_env_values = true, default_value = "")]
    pub access_token: String,
}

#[derive(Debug, Args)]
pub struct AccountArgs {
    pub account_id: String,

    #[command(flatten)]
    pub token: AccessTokenArg,
}

#[derive(Debug, Subcommand)]
pub enum BankAccountsCommand {
    /// List the bank accounts of a seller account.
    List {
        account_id: String,
        #[command(flatten)]
        token: AccessTokenArg,
    },
    /// Fetch one bank account.
    Get {
        id: String,
        #[command(flatten)]
        token: AccessTokenArg,
    },
    /// Remove a bank account.
    Delete {
        id: String,
        #[command(flatten)]
        token: AccessTokenArg,
    },
}

#[derive(Debug, Subcommand)]
pub enum SubscriptionsCommand {
    /// List plans.
    Plans,
    /// Fetch one plan by code.
    Plan { code: String },
    /// Fetch one subscription by code.
    Get { code: String },
    /// Cancel a subscription.
    Cancel { code: String },
    /// List invoices of a subscription.
    Invoices { code: String },
}

#[derive(Debug, Args)]
pub struct RawRequestArgs {
    /// HTTP verb: GET, POST, PUT or DELETE.
    pub method: String,

    /// Path below the API version, e.g. `/orders`.
    pub path: String,

    /// JSON request body.
    #[arg(long)]
    pub body: Option<String>,

    /// Version segment override; pass an empty string to drop it.
    #[arg(long)]
    pub api_version: Option<String>,
}
