use moip_core::{Moip, RequestOptions};
use serde_json::Value;

use crate::cli::RawRequestArgs;
use crate::error::CliError;

pub async fn run(moip: &Moip, args: &RawRequestArgs) -> Result<Value, CliError> {
    let body = args
        .body
        .as_deref()
        .map(serde_json::from_str::<Value>)
        .transpose()?;

    let mut options = RequestOptions::new();
    if let Some(version) = &args.api_version {
        options = options.with_version(version.as_str());
    }

    let data = moip
        .dispatcher()
        .request_verb(&args.method, &args.path, body.as_ref(), &options)
        .await?;
    Ok(data)
}
