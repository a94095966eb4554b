use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::llm_client::GenerationConfig;

const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub generation: GenerationConfig,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = GenerationConfig::default();
        let generation = GenerationConfig {
            max_output_tokens: parse_env("GEMINI_MAX_OUTPUT_TOKENS", defaults.max_output_tokens)?,
            temperature: parse_env("GEMINI_TEMPERATURE", defaults.temperature)?,
            top_p: parse_env("GEMINI_TOP_P", defaults.top_p)?,
            top_k: parse_env("GEMINI_TOP_K", defaults.top_k)?,
        };
        validate_generation(&generation)?;

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            gemini_model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            generation,
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Parses `key` if set, otherwise returns `default`.
fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value: '{raw}'")),
        Err(_) => Ok(default),
    }
}

fn validate_generation(generation: &GenerationConfig) -> Result<()> {
    if !(0.0..=1.0).contains(&generation.temperature) {
        bail!(
            "GEMINI_TEMPERATURE must be between 0 and 1 (got {})",
            generation.temperature
        );
    }
    if !(0.0..=1.0).contains(&generation.top_p) {
        bail!("GEMINI_TOP_P must be between 0 and 1 (got {})", generation.top_p);
    }
    if generation.max_output_tokens == 0 {
        bail!("GEMINI_MAX_OUTPUT_TOKENS must be positive");
    }
    Ok(())
}
