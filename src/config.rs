// src/config.rs
use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

/// Where listing records are read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingSourceKind {
    Mock,
    Sqlite,
}

impl FromStr for ListingSourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mock" => Ok(ListingSourceKind::Mock),
            "sqlite" => Ok(ListingSourceKind::Sqlite),
            other => Err(format!("unknown listing source '{other}'")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub database_path: String,
    pub max_workers: usize,
    pub listing_source: ListingSourceKind,
    /// Absolute origin used when building links that leave the site (emails).
    pub public_base_url: String,
    pub session_ttl_secs: i64,
    pub verify_ttl_secs: i64,
    pub brevo_api_key: Option<String>,
    pub mail_sender_email: String,
    pub mail_sender_name: String,
    /// Where contact form submissions are forwarded.
    pub contact_inbox: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
            database_path: "realty.sqlite3".to_string(),
            max_workers: 8,
            listing_source: ListingSourceKind::Sqlite,
            public_base_url: "http://127.0.0.1:3000".to_string(),
            session_ttl_secs: 60 * 60 * 24 * 7,
            verify_ttl_secs: 15 * 60,
            brevo_api_key: None,
            mail_sender_email: "no-reply@realty.local".to_string(),
            mail_sender_name: "Realty".to_string(),
            contact_inbox: "hello@realty.local".to_string(),
        }
    }
}

impl AppConfig {
    /// Read settings from the environment, falling back to defaults.
    pub fn load() -> Self {
        let d = Self::default();

        Self {
            bind_addr: try_load("BIND_ADDR", d.bind_addr),
            database_path: try_load("DATABASE_PATH", d.database_path),
            max_workers: try_load("MAX_WORKERS", d.max_workers),
            listing_source: try_load("LISTING_SOURCE", d.listing_source),
            public_base_url: try_load("PUBLIC_BASE_URL", d.public_base_url)
                .trim_end_matches('/')
                .to_string(),
            session_ttl_secs: try_load("SESSION_TTL_SECS", d.session_ttl_secs),
            verify_ttl_secs: try_load("VERIFY_TTL_SECS", d.verify_ttl_secs),
            brevo_api_key: env::var("BREVO_API_KEY")
                .ok()
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty()),
            mail_sender_email: try_load("MAIL_SENDER_EMAIL", d.mail_sender_email),
            mail_sender_name: try_load("MAIL_SENDER_NAME", d.mail_sender_name),
            contact_inbox: try_load("CONTACT_INBOX", d.contact_inbox),
        }
    }
}

fn try_load<T>(key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Debug,
    T::Err: Display,
{
    let Ok(raw) = env::var(key) else {
        info!("{key} not set, using default: {default:?}");
        return default;
    };

    raw.trim().parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value '{raw}': {e}, using default: {default:?}");
        default
    })
}
