mod merchant;
mod oauth;
mod raw;
mod subscriptions;

use moip_core::Moip;
use serde_json::Value;

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<Value, CliError> {
    let moip = client(cli)?;

    match &cli.command {
        Command::Customer(command) => merchant::customer(&moip, command).await,
        Command::Order(command) => merchant::order(&moip, command).await,
        Command::Payment(command) => merchant::payment(&moip, command).await,
        Command::Notifications(command) => merchant::notifications(&moip, command).await,
        Command::ResendWebhook(args) => merchant::resend_webhook(&moip, args).await,
        Command::Oauth(command) => oauth::run(&moip, command).await,
        Command::BankAccounts(command) => oauth::bank_accounts(&moip, command).await,
        Command::Subscriptions(command) => subscriptions::run(&moip, command).await,
        Command::Request(args) => raw::run(&moip, args).await,
    }
}

fn client(cli: &Cli) -> Result<Moip, CliError> {
    let mut builder = Moip::builder(cli.token.as_str(), cli.key.as_str())
        .production(cli.production)
        .diagnostics(cli.debug);
    if let Some(app_id) = &cli.app_id {
        builder = builder.app_id(app_id.as_str());
    }
    if let Some(app_secret) = &cli.app_secret {
        builder = builder.app_secret(app_secret.as_str());
    }

    let moip = builder.build()?;
    tracing::debug!(environment = %moip.environment(), "client configured");
    Ok(moip)
}
