// src/handlers/players.rs
use actix_web::{http::header, web, HttpResponse};
use log::debug;
use uuid::Uuid;

use crate::app::RosterApp;
use crate::models::player::PlayerId;
use crate::render::page::render_player_detail;
use crate::render::FormValues;
use crate::utils::RequestError;

fn back_to_roster() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

pub async fn add_player(
    app: web::Data<RosterApp>,
    form: web::Form<FormValues>,
) -> Result<HttpResponse, RequestError> {
    debug!("Add player form submitted");
    app.submit_new_player(form.into_inner()).await?;
    Ok(back_to_roster())
}

pub async fn remove_player(
    app: web::Data<RosterApp>,
    path: web::Path<String>,
) -> Result<HttpResponse, RequestError> {
    let id = PlayerId::from(path.into_inner());
    debug!("Remove requested for player #{}", id);
    app.remove_player(&id).await?;
    Ok(back_to_roster())
}

pub async fn show_player(
    app: web::Data<RosterApp>,
    path: web::Path<String>,
) -> Result<HttpResponse, RequestError> {
    let id = PlayerId::from(path.into_inner());
    match app.player_details(&id).await? {
        Some(player) => Ok(HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(render_player_detail(&player))),
        None => Err(RequestError::PlayerUnavailable(id)),
    }
}

pub async fn toggle_details(
    app: web::Data<RosterApp>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, RequestError> {
    app.toggle_details(path.into_inner())?;
    Ok(back_to_roster())
}
