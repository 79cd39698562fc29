//! Send command

use crate::Config;
use anyhow::{Result, anyhow};
use clap::Args;
use groq::{Message, Request};

/// System prompt for single-turn completions
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// Send command arguments
#[derive(Debug, Args)]
pub struct SendCmd {
    /// Maximum tokens to generate
    #[arg(long, default_value_t = 100)]
    pub max_tokens: usize,

    /// The prompt to send
    pub prompt: String,
}

impl SendCmd {
    /// Build the request for this prompt
    pub fn request(&self, config: &Config) -> Request {
        Request::new(
            config.model.as_str(),
            vec![
                Message::system(SYSTEM_PROMPT),
                Message::user(self.prompt.as_str()),
            ],
        )
        .with_temperature(config.temperature)
        .with_max_tokens(self.max_tokens)
    }

    /// Run the send command
    pub async fn run(&self, config: &Config) -> Result<()> {
        let provider = config.provider()?;
        let response = provider
            .send(&self.request(config))
            .await
            .map_err(|e| anyhow!("error creating chat completion: {e}"))?;

        let content = response
            .content()
            .ok_or_else(|| anyhow!("response contained no choices"))?;
        println!("Response: {content}");
        println!("Total tokens: {}", response.usage.total_tokens);
        Ok(())
    }
}
