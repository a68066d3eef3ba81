use moip_core::{Moip, WebhookEvent};
use serde_json::Value;

use crate::cli::{NotificationsCommand, ResendWebhookArgs, ResourceCommand};
use crate::error::CliError;

pub async fn customer(moip: &Moip, command: &ResourceCommand) -> Result<Value, CliError> {
    match command {
        ResourceCommand::Get { id } => Ok(serde_json::to_value(moip.get_customer(id).await?)?),
    }
}

pub async fn order(moip: &Moip, command: &ResourceCommand) -> Result<Value, CliError> {
    match command {
        ResourceCommand::Get { id } => Ok(serde_json::to_value(moip.get_order(id).await?)?),
    }
}

pub async fn payment(moip: &Moip, command: &ResourceCommand) -> Result<Value, CliError> {
    match command {
        ResourceCommand::Get { id } => Ok(serde_json::to_value(moip.get_payment(id).await?)?),
    }
}

pub async fn notifications(moip: &Moip, command: &NotificationsCommand) -> Result<Value, CliError> {
    let data = match command {
        NotificationsCommand::List => serde_json::to_value(moip.get_notifications().await?)?,
        NotificationsCommand::Create(args) => {
            let events = args
                .events
                .iter()
                .map(|event| WebhookEvent::from(event.as_str()))
                .collect();
            serde_json::to_value(moip.set_notification(events, &args.target).await?)?
        }
        NotificationsCommand::Delete { id } => moip.delete_notification(id).await?,
    };
    Ok(data)
}

pub async fn resend_webhook(moip: &Moip, args: &ResendWebhookArgs) -> Result<Value, CliError> {
    let event = args.event.as_deref().map(WebhookEvent::from);
    let response = moip.resend_webhook(&args.resource_id, event).await?;
    Ok(serde_json::to_value(response)?)
}
