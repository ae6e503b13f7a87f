//! CLI command definitions and dispatch.

pub mod health;
pub mod token;
pub mod window;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use taskgate_auth::{RevocationStore, TokenIssuer};
use taskgate_cache::CacheManager;
use taskgate_core::config::AppConfig;
use taskgate_core::result::AppResult;

/// TaskGate: token lifecycle and authorization operator tool
#[derive(Debug, Parser)]
#[command(name = "taskgate", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment overlay (`config/{env}`)
    #[arg(short, long, env = "TASKGATE_ENV", default_value = "development")]
    pub env: String,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Mint an access and refresh token pair for explicit claims
    Issue(token::IssueArgs),
    /// Validate a token and print its claims
    Inspect(token::TokenArg),
    /// Authenticate an access token, including the revocation check
    Verify(token::TokenArg),
    /// Revoke an access token for the rest of its lifetime
    Revoke(token::TokenArg),
    /// Print the revocation fingerprint of a token
    Fingerprint(token::TokenArg),
    /// Check that a date range lies within a bounding range
    CheckWindow(window::CheckWindowArgs),
    /// Check that the revocation store is reachable
    Health,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        match &self.command {
            Commands::Issue(args) => token::issue(args, config).await,
            Commands::Inspect(args) => token::inspect(args, config),
            Commands::Verify(args) => token::verify(args, config).await,
            Commands::Revoke(args) => token::revoke(args, config).await,
            Commands::Fingerprint(args) => {
                token::fingerprint(args);
                Ok(())
            }
            Commands::CheckWindow(args) => window::execute(args),
            Commands::Health => health::execute(config).await,
        }
    }
}

/// Helper: build the revocation store from the configured cache provider
pub async fn revocation_store(config: &AppConfig) -> AppResult<RevocationStore> {
    let cache = CacheManager::new(&config.cache).await?;
    Ok(RevocationStore::new(Arc::new(cache)))
}

/// Helper: build the token issuer
pub fn token_issuer(config: &AppConfig) -> TokenIssuer {
    TokenIssuer::new(&config.auth)
}
