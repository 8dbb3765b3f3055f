//! Run configuration for gh-branch-sweep
//!
//! This crate provides:
//! - `RunConfig`: immutable per-run settings loaded from the environment
//! - `Mode`: the execution mode selected by the confirmation workflow
//! - `ConfigError`: typed errors for missing or malformed settings

pub mod mode;
pub mod run_config;

pub use mode::Mode;
pub use run_config::{ConfigError, RunConfig};
