//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use blens_core::key::KeyStore;
use blens_core::{LensError, LensResult};

pub mod analyze;
pub mod interactive;
pub mod key;

/// Biblical Lens - Content Analysis Through a Biblical Lens
#[derive(Parser)]
#[command(name = "blens")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a content description
    Analyze(analyze::AnalyzeArgs),

    /// Start an interactive analysis session
    Interactive(interactive::InteractiveArgs),

    /// Manage the stored Anthropic API key
    #[command(subcommand)]
    Key(key::KeyCommands),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Analyze(args) => analyze::execute(args).await,
            Commands::Interactive(args) => interactive::execute(args).await,
            Commands::Key(cmd) => key::execute(cmd),
        }
    }
}

/// Key store rooted in the per-user config directory.
pub fn default_key_store() -> Result<KeyStore> {
    let dir = dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine the user config directory"))?
        .join("blens");
    Ok(KeyStore::new(dir))
}

/// Resolve the API key: `ANTHROPIC_API_KEY` wins over the stored key.
pub fn resolve_credential(store: &KeyStore) -> LensResult<String> {
    if let Ok(value) = std::env::var("ANTHROPIC_API_KEY") {
        if !value.is_empty() {
            debug!("using API key from ANTHROPIC_API_KEY");
            return Ok(value);
        }
    }

    store.load()?.ok_or(LensError::MissingCredential)
}

/// Resolve the API key or fail with setup guidance.
pub fn require_credential(store: &KeyStore) -> Result<String> {
    match resolve_credential(store) {
        Ok(key) => Ok(key),
        Err(LensError::MissingCredential) => anyhow::bail!(
            "No API key configured.\n\
             Set one with 'blens key set' or export ANTHROPIC_API_KEY."
        ),
        Err(e) => Err(e.into()),
    }
}
