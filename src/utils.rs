// src/utils.rs
use actix_web::{HttpResponse, ResponseError};
use reqwest::Url;
use std::fmt;
use uuid::Uuid;

use crate::client::ApiError;
use crate::models::player::PlayerId;

#[derive(Debug)]
pub enum RequestError {
    Upstream(ApiError),
    CardNotFound(Uuid),
    PlayerUnavailable(PlayerId),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upstream(e) => write!(f, "Players API request failed: {}", e),
            Self::CardNotFound(id) => write!(f, "No rendered card with id {}", id),
            Self::PlayerUnavailable(id) => write!(f, "Player #{} could not be loaded", id),
        }
    }
}

impl ResponseError for RequestError {
    fn error_response(&self) -> HttpResponse {
        match self {
            Self::Upstream(_) => HttpResponse::BadGateway().body(self.to_string()),
            Self::CardNotFound(_) | Self::PlayerUnavailable(_) => {
                HttpResponse::NotFound().body(self.to_string())
            }
        }
    }
}

impl From<ApiError> for RequestError {
    fn from(e: ApiError) -> Self {
        Self::Upstream(e)
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Percent-encodes `segment` so it stays a single path segment, `/` included.
pub fn encode_path_segment(segment: &str) -> String {
    let mut url = match Url::parse("http://localhost/") {
        Ok(url) => url,
        Err(_) => return segment.to_string(),
    };
    if let Ok(mut path) = url.path_segments_mut() {
        path.clear().push(segment);
    }
    url.path().trim_start_matches('/').to_string()
}
