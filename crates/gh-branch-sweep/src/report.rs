//! Candidate report sink
//!
//! The full candidate list is written once per run, before any
//! deletion is attempted and in every mode. In Nuke mode this file is
//! the only record of what was targeted.

use crate::candidate::Candidate;
use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::Path;

/// Write the candidate list as pretty JSON to `path`
pub fn write_report(path: &Path, candidates: &[Candidate]) -> Result<()> {
    let json = serde_json::to_string_pretty(candidates)
        .context("Failed to serialize candidate report")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write candidate report to {:?}", path))?;

    info!("Wrote {} candidates to {:?}", candidates.len(), path);
    Ok(())
}
