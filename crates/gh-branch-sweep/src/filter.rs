//! Branch filter pipeline
//!
//! Applies the ordered predicates to one page of closed pull requests
//! and produces deletion candidates. Stage order matters: the cheap
//! local checks run first, the network-dependent existence check runs
//! last and only for survivors.
//!
//! Every exclusion degrades to "not a candidate" — this module never
//! returns an error to its caller.

use crate::age::age_in_months;
use crate::candidate::Candidate;
use chrono::{DateTime, Utc};
use futures::future::join_all;
use gh_client::{GitHubClient, PullRequest};
use gh_sweep_config::RunConfig;
use log::{debug, info};

/// Filter one page of closed pull requests down to deletion candidates
///
/// Stages, in order:
/// 1. merged only (`merged_at` present)
/// 2. head branch not in the forbidden set
/// 3. base branch in the allowed set
/// 4. head branch still exists (concurrent lookups, joined here)
/// 5. age at or above the threshold
///
/// Lookup failures and missing branches are logged and dropped; they
/// are expected (another actor may have already cleaned up).
pub async fn filter_page(
    client: &dyn GitHubClient,
    config: &RunConfig,
    now: DateTime<Utc>,
    page: Vec<PullRequest>,
) -> Vec<Candidate> {
    let survivors: Vec<PullRequest> = page
        .into_iter()
        .filter(|pr| {
            if pr.merged_at.is_none() {
                debug!("PR #{} skipped: closed without merging", pr.number);
                return false;
            }
            if config.forbidden_head_refs.contains(&pr.head_branch) {
                info!(
                    "PR #{} skipped: head branch {} is protected",
                    pr.number, pr.head_branch
                );
                return false;
            }
            if !config.allowed_base_refs.contains(&pr.base_branch) {
                debug!(
                    "PR #{} skipped: base branch {} is not in the allowlist",
                    pr.number, pr.base_branch
                );
                return false;
            }
            true
        })
        .collect();

    // Fan out existence lookups for the whole page, join before the
    // age filter. No shared state between lookups.
    let lookups = survivors
        .iter()
        .map(|pr| client.get_branch(&config.owner, &config.repo, &pr.head_branch));
    let lookup_results = join_all(lookups).await;

    let mut candidates = Vec::new();
    for (pr, lookup) in survivors.into_iter().zip(lookup_results) {
        match lookup {
            Ok(Some(_)) => {}
            Ok(None) => {
                info!(
                    "PR #{} skipped: branch {} no longer exists",
                    pr.number, pr.head_branch
                );
                continue;
            }
            Err(e) => {
                info!(
                    "PR #{} skipped: lookup of branch {} failed: {}",
                    pr.number, pr.head_branch, e
                );
                continue;
            }
        }

        // merged_at is present: stage 1 already dropped unmerged PRs
        let Some(merged_at) = pr.merged_at else {
            continue;
        };
        let age_months = age_in_months(merged_at, now);
        if age_months < config.age_threshold_months {
            debug!(
                "PR #{} skipped: branch {} is only {:.1} months old",
                pr.number, pr.head_branch, age_months
            );
            continue;
        }

        info!(
            "PR #{} candidate: {} merged into {} {:.1} months ago ({})",
            pr.number, pr.head_branch, pr.base_branch, age_months, pr.html_url
        );
        candidates.push(Candidate {
            number: pr.number,
            title: pr.title,
            state: pr.state,
            branch_name: pr.head_branch,
            base_branch_name: pr.base_branch,
            merged_at,
            age_months,
        });
    }

    candidates
}
