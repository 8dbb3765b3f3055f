//! GitHub API data transfer objects
//!
//! These types represent the data returned from the GitHub API.
//! They are intentionally separate from octocrab's models to keep
//! this crate's surface small and its consumers decoupled.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A closed pull request from the GitHub API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    /// PR number (e.g., 123)
    pub number: u64,

    /// PR title
    pub title: String,

    /// PR state as reported by GitHub ("open" or "closed")
    pub state: String,

    /// When the PR was merged (None if closed without merging)
    pub merged_at: Option<DateTime<Utc>>,

    /// HEAD branch name (the branch being merged from)
    pub head_branch: String,

    /// Base branch name (the branch being merged into)
    pub base_branch: String,

    /// PR URL for opening in browser
    pub html_url: String,
}

/// A branch that exists on the remote
///
/// Returned by `GitHubClient::get_branch` when the lookup succeeds.
/// A missing branch is `Ok(None)`, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchInfo {
    /// Branch name (e.g., "feature/foo")
    pub name: String,

    /// SHA of the branch tip
    pub commit_sha: String,
}
