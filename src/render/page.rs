// src/render/page.rs
use crate::models::player::Player;
use crate::render::{FormContainer, RosterContainer};
use crate::utils::escape_html;

const STYLE: &str = "\
.hidden { display: none; }
#all-players-container { display: flex; flex-wrap: wrap; gap: 1rem; }
.player-card { border: 1px solid #ccc; border-radius: 8px; padding: 0.5rem; width: 220px; }
.player-card img { width: 100%; height: 160px; object-fit: cover; }
";

fn document(title: &str, body: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n<html>\n<head>\n",
            "<meta charset=\"utf-8\">\n",
            "<title>{}</title>\n",
            "<style>\n{}</style>\n",
            "</head>\n<body>\n{}</body>\n</html>\n"
        ),
        escape_html(title),
        STYLE,
        body
    )
}

pub fn render_page(roster: &RosterContainer, form: &FormContainer) -> String {
    let mut body = String::from("<h1>Puppy Bowl</h1>\n");
    body.push_str(&form.to_html());
    body.push_str(&roster.to_html());
    document("Puppy Bowl", &body)
}

pub fn render_player_detail(player: &Player) -> String {
    let body = format!(
        concat!(
            "<a href=\"/\">Back to roster</a>\n",
            "<div class=\"player-detail\" data-player-id=\"{id}\">\n",
            "  <img src=\"{image}\" alt=\"{name}\">\n",
            "  <h2>{name}</h2>\n",
            "  <p class=\"breed-info\">Breed: {breed}</p>\n",
            "  <p class=\"status-info\">Status: {status}</p>\n",
            "</div>\n"
        ),
        id = escape_html(player.id.as_str()),
        image = escape_html(&player.image_url),
        name = escape_html(&player.name),
        breed = escape_html(&player.breed),
        status = escape_html(&player.status),
    );
    document(&player.name, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::player;
    use crate::render::{render_all_players, render_new_player_form};

    #[test]
    fn page_contains_both_containers() {
        let mut roster = RosterContainer::default();
        let mut form = FormContainer::default();
        let players = vec![player(1, "Rex")];
        render_all_players(&mut roster, Some(players.as_slice()));
        render_new_player_form(&mut form, false);

        let html = render_page(&roster, &form);
        assert!(html.contains("id=\"all-players-container\""));
        assert!(html.contains("id=\"new-player-form\""));
        assert!(html.contains("<h3>Rex</h3>"));
        assert!(html.contains(".hidden { display: none; }"));
    }

    #[test]
    fn detail_view_shows_breed_and_status() {
        let html = render_player_detail(&player(3, "Bo"));
        assert!(html.contains("<title>Bo</title>"));
        assert!(html.contains("Breed: Bo breed"));
        assert!(html.contains("Status: bench"));
        assert!(!html.contains("hidden\""));
    }
}
