//! Deletion executor
//!
//! Iterates the candidate list sequentially and attempts each branch
//! deletion. Sequential on purpose: per-item logging stays ordered and
//! deterministic. A failure on one candidate never aborts the batch;
//! there are no retries.

use crate::candidate::Candidate;
use gh_client::GitHubClient;
use gh_sweep_config::RunConfig;
use log::{info, warn};

/// Outcome counts of one deletion pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeletionSummary {
    /// Branches deleted successfully
    pub deleted: usize,
    /// Deletion attempts that errored
    pub failed: usize,
}

/// Attempt to delete every candidate's branch
///
/// The run succeeds even if every single deletion fails; failures are
/// reported per item and counted in the summary.
pub async fn delete_candidates(
    client: &dyn GitHubClient,
    config: &RunConfig,
    candidates: &[Candidate],
) -> DeletionSummary {
    let mut summary = DeletionSummary::default();

    for candidate in candidates {
        match client
            .delete_ref(&config.owner, &config.repo, &candidate.branch_name)
            .await
        {
            Ok(()) => {
                info!(
                    "Deleted branch {} (PR #{}, merged into {})",
                    candidate.branch_name, candidate.number, candidate.base_branch_name
                );
                summary.deleted += 1;
            }
            Err(e) => {
                warn!(
                    "Failed to delete branch {} (PR #{}): {}",
                    candidate.branch_name, candidate.number, e
                );
                summary.failed += 1;
            }
        }
    }

    summary
}
