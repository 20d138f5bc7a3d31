use actix_web::web;

pub mod index;
pub mod players;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index::index))
        .route("/health", web::get().to(index::health))
        .route("/players", web::post().to(players::add_player))
        .route("/players/{id}", web::get().to(players::show_player))
        .route("/players/{id}/remove", web::post().to(players::remove_player))
        .route("/cards/{element_id}/details", web::post().to(players::toggle_details));
}
