use std::env;
use std::str::FromStr;

use url::Url;

pub fn init_logging() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
}

pub const MODEL_NAME: &str = "gemini-1.5-flash";
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const EMAIL_SUBJECT: &str = "Meeting Summary";

const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
const DEFAULT_SMTP_PORT: u16 = 465;
const DEFAULT_JSON_LIMIT: usize = 10 * 1024 * 1024;
const DEFAULT_API_URL: &str = "http://localhost:5000/api";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Everything the API server needs, read from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub frontend_url: String,
    pub host: String,
    pub port: u16,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub email_user: String,
    pub email_pass: String,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub json_limit: usize,
}

impl ServerConfig {
    /// Loads `.env` (if present) and then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(ServerConfig {
            frontend_url: frontend_origin(&lookup)?,
            host: optional(&lookup, "HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parsed(&lookup, "PORT", DEFAULT_PORT)?,
            gemini_api_key: required(&lookup, "GEMINI_API_KEY")?,
            gemini_model: optional(&lookup, "GEMINI_MODEL").unwrap_or_else(|| MODEL_NAME.to_string()),
            gemini_api_base: optional(&lookup, "GEMINI_API_BASE")
                .unwrap_or_else(|| GEMINI_API_BASE.to_string()),
            email_user: required(&lookup, "EMAIL_USER")?,
            email_pass: required(&lookup, "EMAIL_PASS")?,
            smtp_host: optional(&lookup, "SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
            smtp_port: parsed(&lookup, "SMTP_PORT", DEFAULT_SMTP_PORT)?,
            json_limit: parsed(&lookup, "JSON_LIMIT", DEFAULT_JSON_LIMIT)?,
        })
    }
}

/// Where the terminal client finds the API service.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: Url,
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = optional(&lookup, "API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = Url::parse(&raw).map_err(|_| ConfigError::Invalid {
            name: "API_URL",
            value: raw.clone(),
        })?;
        Ok(ClientConfig { api_url })
    }
}

/// `URL` must be a concrete http(s) origin; CORS credentials rule out `*`.
fn frontend_origin<F>(lookup: &F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = optional(lookup, "URL").unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_string());
    let invalid = || ConfigError::Invalid {
        name: "URL",
        value: raw.clone(),
    };
    let url = Url::parse(&raw).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(invalid());
    }
    Ok(url.origin().ascii_serialization())
}

fn optional<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    optional(lookup, name).ok_or(ConfigError::Missing(name))
}

fn parsed<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match optional(lookup, name) {
        Some(value) => value
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}
