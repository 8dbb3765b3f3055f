//! Octocrab-based GitHub API client
//!
//! Direct implementation of the `GitHubClient` trait using the octocrab
//! library. Listing uses the typed pulls API; branch lookup and ref
//! deletion use raw routes since octocrab does not model them the way
//! this tool needs.

use crate::client::GitHubClient;
use crate::types::{BranchInfo, PullRequest};
use async_trait::async_trait;
use log::debug;
use octocrab::Octocrab;
use serde::Deserialize;
use std::sync::Arc;

/// Direct GitHub API client using octocrab
#[derive(Debug, Clone)]
pub struct OctocrabClient {
    octocrab: Arc<Octocrab>,
}

impl OctocrabClient {
    /// Create a new client with the given octocrab instance
    pub fn new(octocrab: Arc<Octocrab>) -> Self {
        Self { octocrab }
    }

    /// Get a reference to the underlying octocrab instance
    pub fn octocrab(&self) -> &Octocrab {
        &self.octocrab
    }
}

/// Payload of `GET /repos/{owner}/{repo}/branches/{branch}`
#[derive(Debug, Deserialize)]
struct BranchPayload {
    name: String,
    commit: BranchCommit,
}

#[derive(Debug, Deserialize)]
struct BranchCommit {
    sha: String,
}

#[async_trait]
impl GitHubClient for OctocrabClient {
    async fn list_closed_pull_requests(
        &self,
        owner: &str,
        repo: &str,
        page: u32,
        per_page: u8,
    ) -> anyhow::Result<Vec<PullRequest>> {
        debug!("Fetching closed PRs page {} for {}/{}", page, owner, repo);

        let fetched = self
            .octocrab
            .pulls(owner, repo)
            .list()
            .state(octocrab::params::State::Closed)
            .sort(octocrab::params::pulls::Sort::Updated)
            .direction(octocrab::params::Direction::Descending)
            .per_page(per_page)
            .page(page)
            .send()
            .await?;

        let prs: Vec<PullRequest> = fetched.items.iter().map(convert_pull_request).collect();

        debug!(
            "Fetched {} closed PRs on page {} for {}/{}",
            prs.len(),
            page,
            owner,
            repo
        );
        Ok(prs)
    }

    async fn get_branch(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
    ) -> anyhow::Result<Option<BranchInfo>> {
        debug!("Looking up branch {} in {}/{}", branch, owner, repo);

        // Raw GET since octocrab has no typed single-branch endpoint
        let route = format!("/repos/{}/{}/branches/{}", owner, repo, branch);
        let result: Result<BranchPayload, octocrab::Error> =
            self.octocrab.get(route, None::<&()>).await;
        match result {
            Ok(payload) => Ok(Some(BranchInfo {
                name: payload.name,
                commit_sha: payload.commit.sha,
            })),
            Err(octocrab::Error::GitHub { source, .. })
                if source.status_code.as_u16() == 404 =>
            {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn delete_ref(&self, owner: &str, repo: &str, branch: &str) -> anyhow::Result<()> {
        debug!("Deleting ref heads/{} in {}/{}", branch, owner, repo);

        let route = format!("/repos/{}/{}/git/refs/heads/{}", owner, repo, branch);
        let response = self.octocrab._delete(route, None::<&()>).await?;

        if !response.status().is_success() {
            anyhow::bail!(
                "Failed to delete ref heads/{} in {}/{}: HTTP {}",
                branch,
                owner,
                repo,
                response.status()
            );
        }
        Ok(())
    }
}

/// Convert octocrab PullRequest to our PullRequest type
fn convert_pull_request(pr: &octocrab::models::pulls::PullRequest) -> PullRequest {
    PullRequest {
        number: pr.number,
        title: pr.title.clone().unwrap_or_default(),
        state: match pr.state {
            Some(octocrab::models::IssueState::Open) => "open".to_string(),
            _ => "closed".to_string(),
        },
        merged_at: pr.merged_at,
        head_branch: pr.head.ref_field.clone(),
        base_branch: pr.base.ref_field.clone(),
        html_url: pr
            .html_url
            .as_ref()
            .map(|u| u.to_string())
            .unwrap_or_default(),
    }
}
