use anyhow::{Context, Result};
use std::env;

pub const DEFAULT_PREDICTION_API_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Staging,
    Prod,
}

impl Environment {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "prod" | "production" => Self::Prod,
            "staging" => Self::Staging,
            _ => Self::Dev,
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Self::Dev)
    }

    pub fn is_prod(&self) -> bool {
        matches!(self, Self::Prod)
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub env: Environment,

    // Prediction service
    pub prediction_api_url: String,
    pub prediction_timeout_seconds: u64,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup instead of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Environment::from_str(&lookup("ENV").unwrap_or_else(|| "dev".to_string()));

        // Prediction service
        let prediction_api_url = lookup("PREDICTION_API_URL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PREDICTION_API_URL.to_string());
        url::Url::parse(&prediction_api_url)
            .with_context(|| format!("PREDICTION_API_URL is not a valid URL: {prediction_api_url}"))?;
        let prediction_api_url = prediction_api_url.trim_end_matches('/').to_string();

        let prediction_timeout_seconds = lookup("PREDICTION_TIMEOUT_SECONDS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);

        Ok(Settings {
            env,
            prediction_api_url,
            prediction_timeout_seconds,
        })
    }
}
