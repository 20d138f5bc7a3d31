// src/handlers/index.rs
use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::app::RosterApp;

pub async fn index(app: web::Data<RosterApp>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(app.page_html())
}

pub async fn health(app: web::Data<RosterApp>) -> HttpResponse {
    let (players, generation) =
        app.with_view(|view| (view.roster.cards().len(), view.roster.generation()));
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "players": players,
        "renders": generation
    }))
}
