// src/client/api.rs
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

use crate::client::ApiError;
use crate::config::{normalize_base_url, Config};
use crate::models::envelope::{ApiEnvelope, PlayerPayload, PlayersPayload};
use crate::models::player::{NewPlayer, Player, PlayerId};

/// The four roster operations of the remote players API.
#[async_trait]
pub trait PlayerApi: Send + Sync {
    async fn list_players(&self) -> Result<Vec<Player>, ApiError>;
    async fn get_player(&self, id: &PlayerId) -> Result<Player, ApiError>;
    async fn create_player(&self, player: &NewPlayer) -> Result<Player, ApiError>;
    async fn delete_player(&self, id: &PlayerId) -> Result<(), ApiError>;
}

pub struct HttpPlayerApi {
    client: Client,
    base_url: Url,
}

impl HttpPlayerApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = Url::parse(&normalize_base_url(base_url))
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Self::new(&config.api_base_url, config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    fn players_url(&self) -> Result<Url, ApiError> {
        self.base_url
            .join("players")
            .map_err(|e| ApiError::InvalidUrl(e.to_string()))
    }

    /// The id is pushed as a single encoded segment so it can never leave
    /// the `players` collection.
    fn player_url(&self, id: &PlayerId) -> Result<Url, ApiError> {
        let mut url = self.players_url()?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(format!("{} cannot hold a path", self.base_url)))?
            .push(id.as_str());
        Ok(url)
    }
}

async fn read_envelope<T: DeserializeOwned>(
    response: Response,
) -> Result<ApiEnvelope<T>, ApiError> {
    let status = response.status();
    let body = response.text().await?;
    debug!("Received {} with {} bytes", status, body.len());

    match serde_json::from_str::<ApiEnvelope<T>>(&body) {
        Ok(envelope) => Ok(envelope),
        Err(_) if !status.is_success() => Err(ApiError::Status {
            status: status.as_u16(),
            body,
        }),
        Err(e) => Err(ApiError::Parse(e)),
    }
}

#[async_trait]
impl PlayerApi for HttpPlayerApi {
    async fn list_players(&self) -> Result<Vec<Player>, ApiError> {
        let url = self.players_url()?;
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let payload = read_envelope::<PlayersPayload>(response).await?.into_data()?;
        Ok(payload.players)
    }

    async fn get_player(&self, id: &PlayerId) -> Result<Player, ApiError> {
        let url = self.player_url(id)?;
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let payload = read_envelope::<PlayerPayload>(response).await?.into_data()?;
        Ok(payload.into_player())
    }

    async fn create_player(&self, player: &NewPlayer) -> Result<Player, ApiError> {
        let url = self.players_url()?;
        debug!("POST {} name={}", url, player.name);
        // `.json` sets Content-Type: application/json
        let response = self.client.post(url).json(player).send().await?;
        let payload = read_envelope::<PlayerPayload>(response).await?.into_data()?;
        Ok(payload.into_player())
    }

    async fn delete_player(&self, id: &PlayerId) -> Result<(), ApiError> {
        let url = self.player_url(id)?;
        debug!("DELETE {}", url);
        let response = self.client.delete(url).send().await?;
        read_envelope::<Value>(response).await?.check()?;
        Ok(())
    }
}
