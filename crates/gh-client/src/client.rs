//! GitHub client trait definition
//!
//! This module defines the core `GitHubClient` trait that all client
//! implementations must satisfy. The trait covers exactly the three
//! operations the sweeper consumes: listing closed pull requests,
//! looking up a branch, and deleting a branch ref.

use crate::types::{BranchInfo, PullRequest};
use async_trait::async_trait;

/// GitHub API client trait
///
/// Defines the interface for interacting with the GitHub API.
/// Implementations can be direct (hitting the API) or test doubles
/// that replay scripted responses.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks.
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// Fetch one page of closed pull requests for a repository
    ///
    /// Pages are sorted by update time, newest first. Page numbering
    /// starts at 1; an empty result means there are no further pages.
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner (user or organization)
    /// * `repo` - Repository name
    /// * `page` - 1-based page number
    /// * `per_page` - Page size
    ///
    /// # Returns
    ///
    /// The requested page of closed pull requests, or an error if the
    /// API call fails.
    async fn list_closed_pull_requests(
        &self,
        owner: &str,
        repo: &str,
        page: u32,
        per_page: u8,
    ) -> anyhow::Result<Vec<PullRequest>>;

    /// Look up a branch by name
    ///
    /// # Returns
    ///
    /// `Ok(Some(info))` if the branch exists, `Ok(None)` if GitHub
    /// reports it as not found, or an error for transport failures.
    async fn get_branch(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
    ) -> anyhow::Result<Option<BranchInfo>>;

    /// Delete a branch ref (`heads/{branch}`)
    ///
    /// # Returns
    ///
    /// Ok(()) on success, error on failure. Deleting a branch that no
    /// longer exists is an error.
    async fn delete_ref(&self, owner: &str, repo: &str, branch: &str) -> anyhow::Result<()>;
}
