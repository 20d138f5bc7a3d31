pub mod cards;
pub mod form;
pub mod page;

pub use cards::{render_all_players, RosterContainer};
pub use form::{build_new_player, render_new_player_form, FormContainer, FormValues};
