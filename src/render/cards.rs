// src/render/cards.rs
use log::debug;
use uuid::Uuid;

use crate::models::player::{Player, PlayerId};
use crate::utils::{encode_path_segment, escape_html};

pub const ROSTER_CONTAINER_ID: &str = "all-players-container";

/// One rendered player card and its local details state.
#[derive(Debug, Clone)]
pub struct PlayerCard {
    pub element_id: Uuid,
    pub player: Player,
    pub details_visible: bool,
}

impl PlayerCard {
    pub fn new(player: Player) -> Self {
        Self {
            element_id: Uuid::new_v4(),
            player,
            details_visible: false,
        }
    }

    /// Flips the breed and status lines. Returns the new visibility.
    pub fn toggle_details(&mut self) -> bool {
        self.details_visible = !self.details_visible;
        self.details_visible
    }

    /// Id the remove control deletes.
    pub fn remove_target(&self) -> &PlayerId {
        &self.player.id
    }

    pub fn to_html(&self) -> String {
        let hidden = if self.details_visible { "" } else { " hidden" };
        let id = escape_html(self.player.id.as_str());
        let remove_path = escape_html(&encode_path_segment(self.remove_target().as_str()));
        let name = escape_html(&self.player.name);

        format!(
            concat!(
                "<div class=\"player-card\" id=\"card-{element}\" data-player-id=\"{id}\">\n",
                "  <img src=\"{image}\" alt=\"{name}\">\n",
                "  <h3>{name}</h3>\n",
                "  <p class=\"breed-info{hidden}\">Breed: {breed}</p>\n",
                "  <p class=\"status-info{hidden}\">Status: {status}</p>\n",
                "  <form method=\"post\" action=\"/cards/{element}/details\">",
                "<button class=\"details-btn\">See Details</button></form>\n",
                "  <form method=\"post\" action=\"/players/{remove_path}/remove\">",
                "<button class=\"remove-btn\" data-id=\"{id}\">",
                "Remove from Roster</button></form>\n",
                "</div>\n"
            ),
            element = self.element_id,
            id = id,
            remove_path = remove_path,
            image = escape_html(&self.player.image_url),
            name = name,
            hidden = hidden,
            breed = escape_html(&self.player.breed),
            status = escape_html(&self.player.status),
        )
    }
}

#[derive(Debug)]
pub struct RosterContainer {
    pub element_id: &'static str,
    cards: Vec<PlayerCard>,
    generation: u64,
}

impl Default for RosterContainer {
    fn default() -> Self {
        Self {
            element_id: ROSTER_CONTAINER_ID,
            cards: Vec::new(),
            generation: 0,
        }
    }
}

impl RosterContainer {
    pub fn cards(&self) -> &[PlayerCard] {
        &self.cards
    }

    /// Number of completed renders.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn card_mut(&mut self, element_id: Uuid) -> Option<&mut PlayerCard> {
        self.cards.iter_mut().find(|card| card.element_id == element_id)
    }

    pub fn to_html(&self) -> String {
        let mut html = format!(
            "<div id=\"{}\" data-generation=\"{}\">\n",
            self.element_id, self.generation
        );
        for card in &self.cards {
            html.push_str(&card.to_html());
        }
        html.push_str("</div>\n");
        html
    }
}

/// Replaces every card in the container. `None` stands for a roster that could
/// not be fetched and leaves the container empty.
pub fn render_all_players(container: &mut RosterContainer, players: Option<&[Player]>) {
    container.cards.clear();
    if let Some(players) = players {
        container
            .cards
            .extend(players.iter().cloned().map(PlayerCard::new));
    }
    container.generation += 1;
    debug!(
        "Rendered {} player cards (generation {})",
        container.cards.len(),
        container.generation
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::player;

    fn roster(n: i64) -> Vec<Player> {
        (1..=n).map(|i| player(i, &format!("Pup {}", i))).collect()
    }

    #[test]
    fn renders_one_card_per_record_with_details_hidden() {
        let mut container = RosterContainer::default();
        let players = roster(3);
        render_all_players(&mut container, Some(players.as_slice()));

        assert_eq!(container.cards().len(), 3);
        for (card, record) in container.cards().iter().zip(&players) {
            assert_eq!(&card.player, record);
            assert!(!card.details_visible);
            let html = card.to_html();
            assert!(html.contains(&format!("<h3>{}</h3>", record.name)));
            assert!(html.contains(&format!("src=\"{}\"", record.image_url)));
            assert!(html.contains("class=\"breed-info hidden\""));
            assert!(html.contains("class=\"status-info hidden\""));
        }
        assert_eq!(container.to_html().matches("class=\"player-card\"").count(), 3);
    }

    #[test]
    fn toggling_parity_decides_visibility() {
        let mut card = PlayerCard::new(player(1, "Rex"));
        for _ in 0..4 {
            card.toggle_details();
        }
        assert!(!card.details_visible);
        assert!(card.to_html().contains("breed-info hidden"));

        for _ in 0..3 {
            card.toggle_details();
        }
        assert!(card.details_visible);
        let html = card.to_html();
        assert!(html.contains("class=\"breed-info\">Breed: Rex breed"));
        assert!(html.contains("class=\"status-info\">Status: bench"));
    }

    #[test]
    fn missing_roster_renders_nothing() {
        let mut container = RosterContainer::default();
        render_all_players(&mut container, Some(roster(2).as_slice()));
        render_all_players(&mut container, None);

        assert!(container.cards().is_empty());
        assert_eq!(container.generation(), 2);
        assert!(!container.to_html().contains("player-card"));
    }

    #[test]
    fn second_render_leaves_no_stale_cards() {
        let mut container = RosterContainer::default();
        render_all_players(&mut container, Some(roster(3).as_slice()));
        let first_ids: Vec<Uuid> = container.cards().iter().map(|c| c.element_id).collect();

        let replacement = vec![player(10, "Zed")];
        render_all_players(&mut container, Some(replacement.as_slice()));

        assert_eq!(container.cards().len(), 1);
        assert_eq!(container.cards()[0].player.name, "Zed");
        for id in first_ids {
            assert!(container.card_mut(id).is_none());
        }
        assert!(!container.to_html().contains("Pup 1"));
    }

    #[test]
    fn remove_control_targets_the_record_id() {
        let card = PlayerCard::new(player(42, "Rex"));
        assert_eq!(card.remove_target(), &PlayerId::new("42"));
        assert!(card.to_html().contains("action=\"/players/42/remove\""));
    }

    #[test]
    fn remove_action_encodes_opaque_ids() {
        let mut odd = player(1, "Odd");
        odd.id = PlayerId::new("7/../x?y");
        let html = PlayerCard::new(odd).to_html();
        assert!(html.contains("action=\"/players/7%2F..%2Fx%3Fy/remove\""));
        assert!(html.contains("data-id=\"7/../x?y\""));
    }

    #[test]
    fn interpolated_text_is_escaped() {
        let mut hostile = player(1, "<script>alert(1)</script>");
        hostile.image_url = "x\" onerror=\"boom".to_string();
        let html = PlayerCard::new(hostile).to_html();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("x&quot; onerror=&quot;boom"));
    }
}
