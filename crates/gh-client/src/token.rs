//! GitHub token resolution
//!
//! Resolves the personal access token used to authenticate API calls.
//! Tries multiple sources in order:
//! 1. `GITHUB_TOKEN` env var
//! 2. `GH_TOKEN` env var
//! 3. `gh auth token` command

use anyhow::{Context, Result};
use log::debug;

/// Resolves a GitHub token for github.com
#[derive(Debug, Clone, Default)]
pub struct TokenResolver;

impl TokenResolver {
    /// Create a new token resolver
    pub fn new() -> Self {
        Self
    }

    /// Resolve a token, trying env vars first, then the gh CLI
    ///
    /// # Errors
    ///
    /// Returns an error when no source yields a non-empty token. The
    /// sweeper treats this as a fatal configuration error and exits
    /// before any network call.
    pub async fn resolve(&self) -> Result<String> {
        if let Ok(token) = std::env::var("GITHUB_TOKEN") {
            if !token.is_empty() {
                debug!("Using token from GITHUB_TOKEN");
                return Ok(token);
            }
        }

        if let Ok(token) = std::env::var("GH_TOKEN") {
            if !token.is_empty() {
                debug!("Using token from GH_TOKEN");
                return Ok(token);
            }
        }

        debug!("Trying gh auth token");
        let output = tokio::process::Command::new("gh")
            .args(["auth", "token"])
            .output()
            .await
            .context("Failed to run 'gh auth token'")?;

        if output.status.success() {
            let token = String::from_utf8(output.stdout)
                .context("Invalid UTF-8 in gh auth token output")?
                .trim()
                .to_string();
            if !token.is_empty() {
                debug!("Using token from gh CLI");
                return Ok(token);
            }
        }

        Err(anyhow::anyhow!(
            "No GitHub token found. Set GITHUB_TOKEN or run 'gh auth login'"
        ))
    }
}
