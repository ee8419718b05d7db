//! CLI command definitions and handlers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lexis_core::{ClientConfig, Endpoint, TransportVariant};
use std::path::PathBuf;

pub mod analyze;
pub mod serve;

/// Lexis - lemmatize, tag and extract keywords through a text-analysis server
#[derive(Parser)]
#[command(name = "lexis")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (defaults to <config dir>/lexis/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Analysis server URL, including any context path
    #[arg(long, global = true, env = "LEXIS_BASE_URL")]
    pub base_url: Option<String>,

    /// Bearer token sent with every request
    #[arg(long, global = true, env = "LEXIS_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Request shape: "query" (GET) or "json" (POST)
    #[arg(long, global = true, env = "LEXIS_TRANSPORT")]
    pub transport: Option<TransportVariant>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "LEXIS_TIMEOUT_SECS")]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Lemmatize text
    Lemmatize(analyze::TextArgs),

    /// Part-of-speech tag text
    Tag(analyze::TextArgs),

    /// Extract keywords from text
    Keywords(analyze::KeywordsArgs),

    /// Start the analysis web page
    Serve(serve::ServeArgs),
}

impl Cli {
    /// Resolve the client config: file first, then flags and environment.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::load(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => match default_config_path() {
                Some(path) => ClientConfig::load_or_default(&path)
                    .with_context(|| format!("Failed to load config: {}", path.display()))?,
                None => ClientConfig::default(),
            },
        };

        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url.clone());
        }
        if let Some(token) = &self.token {
            config = config.with_token(token.clone());
        }
        if let Some(transport) = self.transport {
            config = config.with_transport(transport);
        }
        if let Some(timeout) = self.timeout {
            config = config.with_timeout_secs(timeout);
        }

        config.validate()?;
        Ok(config)
    }

    pub async fn execute(self) -> Result<()> {
        let config = self.client_config()?;

        match self.command {
            Commands::Lemmatize(args) => {
                analyze::execute_simple(Endpoint::Lemmatize, args, &config).await
            }
            Commands::Tag(args) => analyze::execute_simple(Endpoint::Tag, args, &config).await,
            Commands::Keywords(args) => analyze::execute_keywords(args, &config).await,
            Commands::Serve(args) => serve::execute(args, &config).await,
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("lexis").join("config.toml"))
}
