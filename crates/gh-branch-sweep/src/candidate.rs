//! Deletion candidates produced by the filter pipeline

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A head branch that survived every filter and is eligible for deletion
///
/// Created by the filter pipeline, consumed read-only by the deletion
/// executor, and written once per run to the report sink.
///
/// Invariants at creation time: `age_months` is at or above the
/// configured threshold, and the branch existed when it was checked.
/// Existence can change before deletion; that race is accepted and a
/// failed delete is only logged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// PR number the branch was merged through
    pub number: u64,

    /// PR title
    pub title: String,

    /// PR state as reported by GitHub
    pub state: String,

    /// The head branch to delete
    pub branch_name: String,

    /// The base branch the PR was merged into
    pub base_branch_name: String,

    /// When the PR was merged
    pub merged_at: DateTime<Utc>,

    /// Age at filter time, in 30-day months
    pub age_months: f64,
}
