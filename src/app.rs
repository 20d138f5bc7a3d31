// src/app.rs
use log::{debug, error, info};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use uuid::Uuid;

use crate::client::{ApiError, PlayerApi};
use crate::config::{Config, ErrorPolicy};
use crate::models::player::{Player, PlayerId};
use crate::render::page::render_page;
use crate::render::{
    build_new_player, render_all_players, render_new_player_form, FormContainer, FormValues,
    RosterContainer,
};
use crate::utils::RequestError;

/// The two containers the page is drawn from.
#[derive(Debug, Default)]
pub struct RosterView {
    pub roster: RosterContainer,
    pub form: FormContainer,
    /// Ticket of the fetch whose result is currently drawn.
    drawn_ticket: u64,
}

/// Ties the API client to the rendered view: loads, mutates, reloads, redraws.
pub struct RosterApp {
    api: Arc<dyn PlayerApi>,
    view: Mutex<RosterView>,
    fetch_tickets: AtomicU64,
    policy: ErrorPolicy,
    show_status_field: bool,
    default_status: String,
}

impl RosterApp {
    pub fn new(api: Arc<dyn PlayerApi>, config: &Config) -> Self {
        Self {
            api,
            view: Mutex::new(RosterView::default()),
            fetch_tickets: AtomicU64::new(0),
            policy: config.error_policy,
            show_status_field: config.show_status_field,
            default_status: config.default_status.clone(),
        }
    }

    /// Startup sequence: fetch the roster, draw it, draw the form. A failed
    /// fetch still draws an empty roster and the form.
    pub async fn init(&self) -> Result<(), RequestError> {
        let ticket = self.next_ticket();
        let fetched = self.api.list_players().await;
        self.draw_roster(ticket, fetched.as_deref().ok());
        render_new_player_form(&mut self.view.lock().form, self.show_status_field);
        self.settle_fetch(fetched)
    }

    pub async fn reload(&self) -> Result<(), RequestError> {
        let ticket = self.next_ticket();
        let fetched = self.api.list_players().await;
        self.draw_roster(ticket, fetched.as_deref().ok());
        self.settle_fetch(fetched)
    }

    pub async fn remove_player(&self, id: &PlayerId) -> Result<(), RequestError> {
        match self.api.delete_player(id).await {
            Ok(()) => {
                info!("Player #{} removed from roster", id);
                self.reload().await
            }
            Err(e) => self.settle(&format!("Failed to remove player #{}", id), e),
        }
    }

    /// Creates a player from the submitted form. The rendered roster is left as is.
    pub async fn submit_new_player(
        &self,
        values: FormValues,
    ) -> Result<Option<Player>, RequestError> {
        let candidate = build_new_player(values, self.show_status_field, &self.default_status);
        match self.api.create_player(&candidate).await {
            Ok(player) => {
                info!("Player added: #{} {} ({})", player.id, player.name, player.status);
                Ok(Some(player))
            }
            Err(e) => self
                .settle(&format!("Failed to add player {:?}", candidate.name), e)
                .map(|_| None),
        }
    }

    pub async fn player_details(&self, id: &PlayerId) -> Result<Option<Player>, RequestError> {
        match self.api.get_player(id).await {
            Ok(player) => Ok(Some(player)),
            Err(e) => self
                .settle(&format!("Failed to fetch player #{}", id), e)
                .map(|_| None),
        }
    }

    /// Flips a card's breed/status lines. No network call.
    pub fn toggle_details(&self, element_id: Uuid) -> Result<bool, RequestError> {
        let mut view = self.view.lock();
        let card = view
            .roster
            .card_mut(element_id)
            .ok_or(RequestError::CardNotFound(element_id))?;
        let visible = card.toggle_details();
        debug!("Card {} details visible: {}", element_id, visible);
        Ok(visible)
    }

    pub fn page_html(&self) -> String {
        let view = self.view.lock();
        render_page(&view.roster, &view.form)
    }

    pub fn with_view<R>(&self, f: impl FnOnce(&RosterView) -> R) -> R {
        f(&self.view.lock())
    }

    fn next_ticket(&self) -> u64 {
        self.fetch_tickets.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Fetches can overlap when two removals race; a roster older than the
    /// one on screen is dropped instead of drawn.
    fn draw_roster(&self, ticket: u64, players: Option<&[Player]>) -> bool {
        let mut view = self.view.lock();
        if ticket < view.drawn_ticket {
            debug!("Skipping roster from fetch {} (fetch {} is drawn)", ticket, view.drawn_ticket);
            return false;
        }
        view.drawn_ticket = ticket;
        render_all_players(&mut view.roster, players);
        true
    }

    fn settle_fetch(&self, fetched: Result<Vec<Player>, ApiError>) -> Result<(), RequestError> {
        match fetched {
            Ok(players) => {
                debug!("Fetched {} players", players.len());
                Ok(())
            }
            Err(e) => self.settle("Failed to fetch players", e),
        }
    }

    /// Logs the failure, then applies the configured policy.
    fn settle(&self, context: &str, e: ApiError) -> Result<(), RequestError> {
        error!("{}: {}", context, e);
        match self.policy {
            ErrorPolicy::LogAndContinue => Ok(()),
            ErrorPolicy::Propagate => Err(RequestError::Upstream(e)),
        }
    }
}
