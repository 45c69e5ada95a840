use std::time::Duration;

use crate::server::error::config::ConfigError;

const DEFAULT_PHOTO_URL_TTL_SECS: u64 = 3600;
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Backend holding profile photos and payment proofs
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MediaBackend {
    /// Amazon S3 (or compatible) bucket, credentials come from the standard AWS environment
    S3 { bucket: String },
    /// Process-local store for development, contents are lost on restart
    Memory,
}

pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub admin_username: String,
    pub admin_email: String,
    pub admin_usernames: Vec<String>,
    pub admin_emails: Vec<String>,
    pub media_backend: MediaBackend,
    pub photo_url_ttl: Duration,
    pub bind_address: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let media_backend = match optional_var("MEDIA_BACKEND").as_deref() {
            None | Some("s3") => MediaBackend::S3 {
                bucket: required_var("MEDIA_BUCKET")?,
            },
            Some("memory") => MediaBackend::Memory,
            Some(other) => {
                return Err(ConfigError::InvalidEnvValue {
                    var: "MEDIA_BACKEND".to_string(),
                    reason: format!("expected \"s3\" or \"memory\", got {:?}", other),
                })
            }
        };

        let photo_url_ttl_secs = match optional_var("PHOTO_URL_TTL_SECS") {
            Some(value) => value
                .parse::<u64>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "PHOTO_URL_TTL_SECS".to_string(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_PHOTO_URL_TTL_SECS,
        };

        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            valkey_url: required_var("VALKEY_URL")?,
            admin_username: required_var("ADMIN_USERNAME")?,
            admin_email: required_var("ADMIN_EMAIL")?,
            admin_usernames: list_var("ADMIN_USERNAMES"),
            admin_emails: list_var("ADMIN_EMAILS"),
            media_backend,
            photo_url_ttl: Duration::from_secs(photo_url_ttl_secs),
            bind_address: optional_var("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
        })
    }
}

fn required_var(var: &str) -> Result<String, ConfigError> {
    optional_var(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
}

fn optional_var(var: &str) -> Option<String> {
    std::env::var(var)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Reads a comma-separated list, blank entries are dropped
fn list_var(var: &str) -> Vec<String> {
    optional_var(var)
        .map(|value| {
            value
                .split(',')
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
