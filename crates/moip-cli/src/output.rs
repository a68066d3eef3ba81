use serde_json::Value;

use crate::error::CliError;

pub fn render(data: &Value, pretty: bool) -> Result<(), CliError> {
    println!("{}", to_text(data, pretty)?);
    Ok(())
}

fn to_text(data: &Value, pretty: bool) -> Result<String, CliError> {
    let text = match data {
        Value::String(text) => text.clone(),
        other if pretty => serde_json::to_string_pretty(other)?,
        other => serde_json::to_string(other)?,
    };
    Ok(text)
}
