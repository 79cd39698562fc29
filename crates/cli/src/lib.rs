//! Groq CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};
pub use {
    chat::{ChatCmd, Conversation},
    config::Config,
    send::SendCmd,
};

mod chat;
mod config;
mod send;

/// Chat with Groq models from the terminal
#[derive(Debug, Parser)]
#[command(name = "groq", version, about)]
pub struct App {
    /// The model to use
    #[arg(short, long, global = true, default_value = config::DEFAULT_MODEL)]
    pub model: String,

    /// Sampling temperature
    #[arg(short, long, global = true, default_value_t = config::DEFAULT_TEMPERATURE)]
    pub temperature: f64,

    /// API base URL
    #[arg(long, global = true, default_value = groq::endpoint::GROQ)]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Verbosity level (use -v, -vv, -vvv, etc.)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Send a single prompt and print the reply
    Send(send::SendCmd),

    /// Start an interactive multi-turn chat
    Chat(chat::ChatCmd),
}

impl App {
    /// Initialize tracing subscriber based on verbosity
    pub fn init_tracing(&self) {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let directive = match self.verbose {
                0 => "warn",
                1 => "groq=debug",
                2 => "groq=trace",
                3 => "debug",
                _ => "trace",
            };
            EnvFilter::new(directive)
        });

        fmt()
            .without_time()
            .with_env_filter(filter)
            .with_target(self.verbose != 0)
            .with_writer(std::io::stderr)
            .init();
    }

    /// Resolve configuration and run the selected command
    pub async fn run(&self) -> Result<()> {
        let config = Config::load(self)?;
        match &self.command {
            Command::Send(cmd) => cmd.run(&config).await,
            Command::Chat(cmd) => cmd.run(&config).await,
        }
    }
}
