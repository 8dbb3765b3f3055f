//! Execution mode

use serde::{Deserialize, Serialize};

/// Execution mode for one run
///
/// Selected exactly once by the confirmation workflow and never
/// changed afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Discovery and logging only, no mutation
    #[default]
    DryRun,

    /// Actual branch deletion after the final confirmation
    Nuke,
}

impl Mode {
    /// Whether this mode performs deletions
    pub fn is_destructive(&self) -> bool {
        matches!(self, Mode::Nuke)
    }
}
