use moip_core::Moip;
use serde_json::Value;

use crate::cli::SubscriptionsCommand;
use crate::error::CliError;

pub async fn run(moip: &Moip, command: &SubscriptionsCommand) -> Result<Value, CliError> {
    let client = moip.subscriptions();
    let data = match command {
        SubscriptionsCommand::Plans => serde_json::to_value(client.get_plans().await?)?,
        SubscriptionsCommand::Plan { code } => serde_json::to_value(client.get_plan(code).await?)?,
        SubscriptionsCommand::Get { code } => {
            serde_json::to_value(client.get_subscription(code).await?)?
        }
        SubscriptionsCommand::Cancel { code } => client.cancel_subscription(code).await?,
        SubscriptionsCommand::Invoices { code } => {
            serde_json::to_value(client.get_subscription_invoices(code).await?)?
        }
    };
    Ok(data)
}
