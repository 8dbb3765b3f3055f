//! Shared test doubles for the pipeline modules

use crate::age::SECONDS_PER_MONTH;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use gh_client::{BranchInfo, GitHubClient, PullRequest};
use gh_sweep_config::RunConfig;
use std::collections::HashSet;
use std::sync::Mutex;

/// Scripted `GitHubClient` for tests
///
/// Pages are served in order; branches exist unless listed as missing
/// or failing. All calls are recorded so tests can assert on exactly
/// what was requested.
#[derive(Default)]
pub struct MockClient {
    /// Pages returned by `list_closed_pull_requests` (page 1 at index 0);
    /// pages beyond the end are empty
    pub pages: Vec<Vec<PullRequest>>,

    /// Fetching this page fails (fatal-fetch scenarios)
    pub fail_fetch_on_page: Option<u32>,

    /// Branch names reported as not found
    pub missing_branches: HashSet<String>,

    /// Branch names whose lookup errors
    pub failing_lookups: HashSet<String>,

    /// Branch names whose deletion errors
    pub failing_deletes: HashSet<String>,

    /// Page numbers requested, in order
    pub fetched_pages: Mutex<Vec<u32>>,

    /// Branch names looked up, in order
    pub looked_up: Mutex<Vec<String>>,

    /// Branch names successfully deleted, in order
    pub deleted: Mutex<Vec<String>>,
}

#[async_trait]
impl GitHubClient for MockClient {
    async fn list_closed_pull_requests(
        &self,
        _owner: &str,
        _repo: &str,
        page: u32,
        _per_page: u8,
    ) -> anyhow::Result<Vec<PullRequest>> {
        self.fetched_pages.lock().unwrap().push(page);
        if self.fail_fetch_on_page == Some(page) {
            anyhow::bail!("fetch failed on page {}", page);
        }
        Ok(self
            .pages
            .get((page - 1) as usize)
            .cloned()
            .unwrap_or_default())
    }

    async fn get_branch(
        &self,
        _owner: &str,
        _repo: &str,
        branch: &str,
    ) -> anyhow::Result<Option<BranchInfo>> {
        self.looked_up.lock().unwrap().push(branch.to_string());
        if self.failing_lookups.contains(branch) {
            anyhow::bail!("lookup failed for {}", branch);
        }
        if self.missing_branches.contains(branch) {
            return Ok(None);
        }
        Ok(Some(BranchInfo {
            name: branch.to_string(),
            commit_sha: "abc123".to_string(),
        }))
    }

    async fn delete_ref(&self, _owner: &str, _repo: &str, branch: &str) -> anyhow::Result<()> {
        if self.failing_deletes.contains(branch) {
            anyhow::bail!("delete failed for {}", branch);
        }
        self.deleted.lock().unwrap().push(branch.to_string());
        Ok(())
    }
}

/// Config with the stock defaults and a tiny repo identity
pub fn test_config() -> RunConfig {
    RunConfig::from_lookup(|var| match var {
        "OWNER" => Some("octocat".to_string()),
        "REPO" => Some("hello-world".to_string()),
        _ => None,
    })
    .unwrap()
}

/// A merged PR whose merge instant is `months` 30-day months before `now`
pub fn merged_months_ago(
    number: u64,
    head: &str,
    base: &str,
    months: f64,
    now: DateTime<Utc>,
) -> PullRequest {
    PullRequest {
        number,
        title: format!("PR {}", number),
        state: "closed".to_string(),
        merged_at: Some(now - Duration::seconds((months * SECONDS_PER_MONTH) as i64)),
        head_branch: head.to_string(),
        base_branch: base.to_string(),
        html_url: format!("https://github.com/octocat/hello-world/pull/{}", number),
    }
}

/// A PR closed without merging
pub fn unmerged_pr(number: u64, head: &str, base: &str) -> PullRequest {
    PullRequest {
        number,
        title: format!("PR {}", number),
        state: "closed".to_string(),
        merged_at: None,
        head_branch: head.to_string(),
        base_branch: base.to_string(),
        html_url: format!("https://github.com/octocat/hello-world/pull/{}", number),
    }
}
