use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_API_ROOT: &str = "https://fsa-puppy-bowl.herokuapp.com/api";
pub const DEFAULT_COHORT_NAME: &str = "2306-FTB-ET-WEB-FT";

/// What the orchestrator does with a failed API call once it has been logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Log and carry on with an empty result.
    #[default]
    LogAndContinue,
    /// Log and hand the failure back to the caller.
    Propagate,
}

impl FromStr for ErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "log" | "log-and-continue" | "continue" => Ok(Self::LogAndContinue),
            "propagate" | "strict" => Ok(Self::Propagate),
            other => Err(format!("Unknown error policy: {}", other)),
        }
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LogAndContinue => write!(f, "log"),
            Self::Propagate => write!(f, "propagate"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    // Remote API
    pub api_base_url: String,
    pub request_timeout_secs: u64,

    // Local page server
    pub bind_address: String,
    pub port: u16,

    // Form
    pub default_status: String,
    pub show_status_field: bool,

    pub error_policy: ErrorPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: cohort_base_url(DEFAULT_API_ROOT, DEFAULT_COHORT_NAME),
            request_timeout_secs: 10,
            bind_address: "127.0.0.1".to_string(),
            port: 8080,
            default_status: "bench".to_string(),
            show_status_field: true,
            error_policy: ErrorPolicy::LogAndContinue,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let api_base_url = match env::var("API_BASE_URL") {
            Ok(url) if !url.trim().is_empty() => normalize_base_url(&url),
            _ => {
                let root = env::var("API_ROOT").unwrap_or_else(|_| DEFAULT_API_ROOT.to_string());
                let cohort = env::var("COHORT_NAME")
                    .unwrap_or_else(|_| DEFAULT_COHORT_NAME.to_string());
                cohort_base_url(&root, &cohort)
            }
        };

        Self {
            api_base_url,

            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),

            bind_address: env::var("BIND_ADDRESS").unwrap_or(defaults.bind_address),

            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),

            default_status: env::var("DEFAULT_STATUS").unwrap_or(defaults.default_status),

            show_status_field: env::var("SHOW_STATUS_FIELD")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.show_status_field),

            error_policy: env::var("ERROR_POLICY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.error_policy),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn bind(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

pub fn cohort_base_url(api_root: &str, cohort: &str) -> String {
    normalize_base_url(&format!(
        "{}/{}",
        api_root.trim_end_matches('/'),
        cohort.trim_matches('/')
    ))
}

/// Request paths are appended directly, so the base always ends in a slash.
pub fn normalize_base_url(url: &str) -> String {
    let trimmed = url.trim();
    if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
