//! Run configuration loaded from the environment
//!
//! Settings come from environment variables, with a `.env` file in the
//! working directory honored first (via dotenvy). `OWNER` and `REPO`
//! are required; everything else has a default.

use std::collections::HashSet;
use std::path::PathBuf;
use thiserror::Error;

/// Default age threshold in months
const DEFAULT_AGE_IN_MONTHS: f64 = 3.0;

/// Default maximum number of candidates accumulated per run
const DEFAULT_MAX_COUNT: usize = 100;

/// Default page size for closed-PR listing
const DEFAULT_PER_PAGE_COUNT: u8 = 30;

/// Head branches that are never deletion targets, whatever a PR claims
const DEFAULT_FORBIDDEN_HEAD_REFS: &str = "master,main,develop,release";

/// Base branches whose merged PRs are eligible for sweeping
const DEFAULT_ALLOWED_BASE_REFS: &str = "master,main";

/// Default path of the candidate report written before any deletion
const DEFAULT_REPORT_PATH: &str = "stale-branches.json";

/// Errors raised while building a `RunConfig`
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

/// Immutable settings for one sweep run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Repository owner (user or organization)
    pub owner: String,

    /// Repository name
    pub repo: String,

    /// Minimum age in months for a merged PR's branch to qualify
    pub age_threshold_months: f64,

    /// Hard cap on accumulated candidates (checked between pages)
    pub max_candidates: usize,

    /// Page size for closed-PR listing
    pub page_size: u8,

    /// Head branches that must never be targeted
    pub forbidden_head_refs: HashSet<String>,

    /// Base branches whose merged PRs are processed
    pub allowed_base_refs: HashSet<String>,

    /// Where the candidate report is written
    pub report_path: PathBuf,
}

impl RunConfig {
    /// Load configuration from the process environment
    ///
    /// Reads a `.env` file from the working directory first, if one
    /// exists, then the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => log::debug!("Loaded environment from {:?}", path),
            Err(_) => log::debug!("No .env file found, using process environment"),
        }
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable source
    ///
    /// The lookup seam keeps this testable without mutating the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let owner = require(&lookup, "OWNER")?;
        let repo = require(&lookup, "REPO")?;

        let age_threshold_months =
            parse_or(&lookup, "AGE_IN_MONTHS", DEFAULT_AGE_IN_MONTHS)?;
        let max_candidates = parse_or(&lookup, "MAX_COUNT", DEFAULT_MAX_COUNT)?;
        let page_size = parse_or(&lookup, "PER_PAGE_COUNT", DEFAULT_PER_PAGE_COUNT)?;

        let forbidden_head_refs = ref_set(
            lookup("FORBIDDEN_HEAD_REFS")
                .as_deref()
                .unwrap_or(DEFAULT_FORBIDDEN_HEAD_REFS),
        );
        let allowed_base_refs = ref_set(
            lookup("ALLOWED_BASE_REFS")
                .as_deref()
                .unwrap_or(DEFAULT_ALLOWED_BASE_REFS),
        );

        let report_path = PathBuf::from(
            lookup("REPORT_PATH").unwrap_or_else(|| DEFAULT_REPORT_PATH.to_string()),
        );

        Ok(Self {
            owner,
            repo,
            age_threshold_months,
            max_candidates,
            page_size,
            forbidden_head_refs,
            allowed_base_refs,
            report_path,
        })
    }
}

fn require<F>(lookup: &F, var: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(var)),
    }
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        Some(value) if !value.is_empty() => value
            .parse()
            .map_err(|_| ConfigError::InvalidValue { var, value }),
        _ => Ok(default),
    }
}

/// Split a comma-separated ref list into a set, ignoring blanks
fn ref_set(raw: &str) -> HashSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
