// src/models/envelope.rs
use serde::Deserialize;
use serde_json::Value;

use crate::client::ApiError;
use crate::models::player::Player;

/// Wrapper the remote API puts around every response body.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub error: Option<Value>,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

fn default_success() -> bool {
    true
}

impl<T> ApiEnvelope<T> {
    /// Fails on `success: false`; the payload may still be absent.
    pub fn check(self) -> Result<Option<T>, ApiError> {
        if !self.success {
            return Err(ApiError::Rejected(describe_failure(self.error.as_ref())));
        }
        Ok(self.data)
    }

    pub fn into_data(self) -> Result<T, ApiError> {
        self.check()?.ok_or(ApiError::MissingData)
    }
}

fn describe_failure(error: Option<&Value>) -> String {
    match error {
        Some(Value::String(message)) => message.clone(),
        Some(value) => value
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| value.to_string()),
        None => "request rejected without a reason".to_string(),
    }
}

#[derive(Debug, Deserialize)]
pub struct PlayersPayload {
    pub players: Vec<Player>,
}

/// Single-player responses nest the record differently per endpoint.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PlayerPayload {
    Player { player: Player },
    Created {
        #[serde(rename = "newPlayer")]
        new_player: Player,
    },
    Bare(Player),
}

impl PlayerPayload {
    pub fn into_player(self) -> Player {
        match self {
            Self::Player { player } => player,
            Self::Created { new_player } => new_player,
            Self::Bare(player) => player,
        }
    }
}
