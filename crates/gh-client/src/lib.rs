//! GitHub API client for stale branch sweeping
//!
//! This crate provides a trait-based GitHub API client covering the
//! three operations the sweeper needs: listing closed pull requests
//! page by page, looking up a branch, and deleting a branch ref.
//!
//! The trait seam exists so the discovery pipeline and the deletion
//! executor can be driven by test doubles without touching the
//! network.
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_client::{GitHubClient, OctocrabClient, TokenResolver};
//! use std::sync::Arc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let token = TokenResolver::new().resolve().await?;
//! let octocrab = octocrab::Octocrab::builder()
//!     .personal_token(token)
//!     .build()?;
//! let client = OctocrabClient::new(Arc::new(octocrab));
//!
//! let page = client
//!     .list_closed_pull_requests("owner", "repo", 1, 30)
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod octocrab_client;
pub mod token;
pub mod types;

pub use client::GitHubClient;
pub use octocrab_client::OctocrabClient;
pub use token::TokenResolver;
pub use types::{BranchInfo, PullRequest};

// Re-export octocrab so consumers don't need to depend on it directly
pub use octocrab;
