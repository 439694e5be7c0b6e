use anyhow::{bail, Context, Result};
use reqwest::Url;

pub const DEFAULT_API_BASE: &str = "http://localhost:3000";

/// Client configuration loaded from environment variables (and `.env`).
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base: Url,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let raw_base = std::env::var("CIVIC_API_BASE")
            .or_else(|_| std::env::var("EXPO_PUBLIC_API"))
            .unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        Ok(Config {
            api_base: parse_api_base(&raw_base)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base: Url::parse(DEFAULT_API_BASE).expect("default API base is a valid URL"),
            rust_log: "info".to_string(),
        }
    }
}

/// Parses the backend base URL. Only http(s) endpoints are accepted.
pub fn parse_api_base(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())
        .with_context(|| format!("API base '{raw}' is not a valid URL"))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!("API base '{raw}' must use http or https");
    }
    Ok(url)
}
