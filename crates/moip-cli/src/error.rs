use moip_core::{ClientError, ValidationError};
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("command error: {0}")]
    Command(String),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) | Self::Command(_) => 2,
            Self::Client(error) => match error {
                ClientError::Validation(_) => 2,
                ClientError::Api(_) | ClientError::Unstructured { .. } => 3,
                ClientError::Transport(_) => 4,
                ClientError::Serialization(_) => 5,
            },
            Self::Serialization(_) => 5,
        }
    }
}
