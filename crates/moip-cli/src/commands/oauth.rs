use moip_core::{parse_scopes, Moip, OAuthClient, OAuthGrant};
use serde_json::Value;

use crate::cli::{AccessTokenArg, BankAccountsCommand, OAuthCommand};
use crate::error::CliError;

pub async fn run(moip: &Moip, command: &OAuthCommand) -> Result<Value, CliError> {
    match command {
        OAuthCommand::Url(args) => {
            let scopes = args
                .scopes
                .iter()
                .flat_map(|raw| parse_scopes(raw))
                .collect::<Vec<_>>();
            Ok(Value::String(moip.oauth_url(&args.redirect_uri, &scopes)?))
        }
        OAuthCommand::Token(args) => {
            let grant = OAuthGrant::from_query(&args.query);
            if grant.code.is_none() {
                return Err(CliError::Command(String::from(
                    "redirect query carries no valid authorization code",
                )));
            }
            let token = moip.access_token(&grant, &args.redirect_uri).await?;
            Ok(serde_json::to_value(token)?)
        }
        OAuthCommand::Account(args) => {
            let client = seller(moip, &args.token)?;
            Ok(serde_json::to_value(client.get_account(&args.account_id).await?)?)
        }
    }
}

pub async fn bank_accounts(moip: &Moip, command: &BankAccountsCommand) -> Result<Value, CliError> {
    let data = match command {
        BankAccountsCommand::List { account_id, token } => {
            serde_json::to_value(seller(moip, token)?.get_bank_accounts(account_id).await?)?
        }
        BankAccountsCommand::Get { id, token } => {
            serde_json::to_value(seller(moip, token)?.get_bank_account(id).await?)?
        }
        BankAccountsCommand::Delete { id, token } => {
            seller(moip, token)?.delete_bank_account(id).await?
        }
    };
    Ok(data)
}

fn seller(moip: &Moip, token: &AccessTokenArg) -> Result<OAuthClient, CliError> {
    Ok(moip.oauth(&token.access_token)?)
}
