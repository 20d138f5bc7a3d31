// src/client/error.rs
use std::fmt;

#[derive(Debug)]
pub enum ApiError {
    Network(reqwest::Error),
    Status { status: u16, body: String },
    Parse(serde_json::Error),
    InvalidUrl(String),
    Rejected(String),
    MissingData,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(e) => write!(f, "Network error: {}", e),
            Self::Status { status, body } => {
                write!(f, "Unexpected HTTP status {}: {}", status, truncate(body, 200))
            }
            Self::Parse(e) => write!(f, "Malformed response body: {}", e),
            Self::InvalidUrl(reason) => write!(f, "Invalid API URL: {}", reason),
            Self::Rejected(message) => write!(f, "Request rejected by API: {}", message),
            Self::MissingData => write!(f, "Response carried no data"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Network(e) => Some(e),
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        Self::Network(e)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

fn truncate(body: &str, max_chars: usize) -> String {
    match body.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
