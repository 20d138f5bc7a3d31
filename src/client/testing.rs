// src/client/testing.rs
use async_trait::async_trait;
use parking_lot::Mutex;

use crate::client::{ApiError, PlayerApi};
use crate::models::player::{NewPlayer, Player, PlayerId};

#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    List,
    Get(PlayerId),
    Create(NewPlayer),
    Delete(PlayerId),
}

/// In-memory stand-in for the remote API that records every call.
#[derive(Default)]
pub struct FakePlayerApi {
    pub roster: Mutex<Vec<Player>>,
    pub calls: Mutex<Vec<ApiCall>>,
    pub fail_list: Mutex<bool>,
    pub fail_mutations: Mutex<bool>,
    next_id: Mutex<i64>,
}

impl FakePlayerApi {
    pub fn with_roster(players: Vec<Player>) -> Self {
        let api = Self::default();
        *api.roster.lock() = players;
        *api.next_id.lock() = 1000;
        api
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().clone()
    }

    pub fn count(&self, matches: impl Fn(&ApiCall) -> bool) -> usize {
        self.calls.lock().iter().filter(|call| matches(call)).count()
    }

    fn rejected(what: &str) -> ApiError {
        ApiError::Rejected(format!("{} failed", what))
    }
}

pub fn player(id: i64, name: &str) -> Player {
    Player {
        id: PlayerId::from(id),
        name: name.to_string(),
        breed: format!("{} breed", name),
        image_url: format!("http://img/{}.png", id),
        status: "bench".to_string(),
    }
}

#[async_trait]
impl PlayerApi for FakePlayerApi {
    async fn list_players(&self) -> Result<Vec<Player>, ApiError> {
        self.calls.lock().push(ApiCall::List);
        if *self.fail_list.lock() {
            return Err(Self::rejected("list"));
        }
        Ok(self.roster.lock().clone())
    }

    async fn get_player(&self, id: &PlayerId) -> Result<Player, ApiError> {
        self.calls.lock().push(ApiCall::Get(id.clone()));
        self.roster
            .lock()
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or_else(|| Self::rejected("get"))
    }

    async fn create_player(&self, player: &NewPlayer) -> Result<Player, ApiError> {
        self.calls.lock().push(ApiCall::Create(player.clone()));
        if *self.fail_mutations.lock() {
            return Err(Self::rejected("create"));
        }
        let id = {
            let mut next = self.next_id.lock();
            *next += 1;
            *next
        };
        let created = Player {
            id: PlayerId::from(id),
            name: player.name.clone(),
            breed: player.breed.clone(),
            image_url: player.image_url.clone(),
            status: player.status.clone(),
        };
        self.roster.lock().push(created.clone());
        Ok(created)
    }

    async fn delete_player(&self, id: &PlayerId) -> Result<(), ApiError> {
        self.calls.lock().push(ApiCall::Delete(id.clone()));
        if *self.fail_mutations.lock() {
            return Err(Self::rejected("delete"));
        }
        self.roster.lock().retain(|p| &p.id != id);
        Ok(())
    }
}
