//! Configuration for the CLI

use crate::App;
use anyhow::{Result, bail};
use groq::{Client, Groq};
use std::{env::VarError, time::Duration};

/// Environment variable holding the Groq API key.
pub const API_KEY_VAR: &str = "GROQ_API_KEY";

/// Model used when `--model` is not given.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Temperature used when `--temperature` is not given.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Resolved CLI configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// The Groq API key
    pub key: String,

    /// The model to use
    pub model: String,

    /// Sampling temperature
    pub temperature: f64,

    /// API base URL
    pub base_url: String,

    /// Request timeout applied to the HTTP client
    pub timeout: Option<Duration>,
}

impl Config {
    /// Load the configuration from the command line and the environment.
    ///
    /// A `.env` file in the working directory is read first when present.
    pub fn load(app: &App) -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!(".env file not loaded: {e}");
        }

        Ok(Self {
            key: api_key(std::env::var(API_KEY_VAR))?,
            model: app.model.clone(),
            temperature: app.temperature,
            base_url: app.base_url.clone(),
            timeout: app.timeout.map(Duration::from_secs),
        })
    }

    /// Build the Groq client for this configuration.
    pub fn provider(&self) -> Result<Groq> {
        let mut builder = Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Groq::custom(builder.build()?, self.key.as_str(), &self.base_url))
    }
}

/// Validate the raw API key lookup.
fn api_key(value: Result<String, VarError>) -> Result<String> {
    match value {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        Ok(_) | Err(VarError::NotPresent) => bail!(
            "{API_KEY_VAR} environment variable is required, set it in your .env file or environment"
        ),
        Err(e @ VarError::NotUnicode(_)) => bail!("{API_KEY_VAR} is not valid unicode: {e}"),
    }
}
