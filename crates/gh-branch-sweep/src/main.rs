//! gh-branch-sweep
//!
//! Finds remote branches whose pull requests were merged into a
//! protected base branch more than a configurable number of months
//! ago, writes them to a JSON report, and — behind a two-stage
//! confirmation gate — deletes them.

use confirm::{ConfirmationWorkflow, StdinPrompt};
use gh_client::{OctocrabClient, TokenResolver};
use gh_sweep_config::{Mode, RunConfig};
use log::info;
use std::sync::Arc;

mod age;
mod candidate;
mod confirm;
mod executor;
mod filter;
mod paginator;
mod report;
#[cfg(test)]
mod test_support;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // All required configuration is checked before any prompt or
    // network call; a gap here exits with code 1.
    let config = match RunConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let token = match TokenResolver::new().resolve().await {
        Ok(token) => token,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    info!(
        "Sweeping {}/{}: branches merged into {:?} at least {} months ago (cap {})",
        config.owner,
        config.repo,
        config.allowed_base_refs,
        config.age_threshold_months,
        config.max_candidates
    );

    let mut workflow = ConfirmationWorkflow::new(StdinPrompt);

    let mode = match workflow.select_mode()? {
        Some(mode) => mode,
        None => abort(),
    };
    if !workflow.confirm_run()? {
        abort();
    }

    let octocrab = octocrab::Octocrab::builder()
        .personal_token(token)
        .build()?;
    let client = OctocrabClient::new(Arc::new(octocrab));

    let candidates = paginator::collect_candidates(&client, &config).await?;
    workflow.discovery_finished();

    // The report is the audit trail; it is written before any
    // deletion, in every mode.
    report::write_report(&config.report_path, &candidates)?;

    if candidates.is_empty() {
        info!("No stale branches found. Nothing to do.");
        return Ok(());
    }

    match mode {
        Mode::DryRun => {
            for candidate in &candidates {
                info!(
                    "Would delete branch {} (PR #{}, merged {:.1} months ago)",
                    candidate.branch_name, candidate.number, candidate.age_months
                );
            }
            info!(
                "Dry run complete: {} stale branches found, none deleted",
                candidates.len()
            );
        }
        Mode::Nuke => {
            if !workflow.confirm_nuke(candidates.len())? {
                abort();
            }
            let summary = executor::delete_candidates(&client, &config, &candidates).await;
            info!(
                "Deletion complete: {} deleted, {} failed (see log above for details)",
                summary.deleted, summary.failed
            );
        }
    }

    Ok(())
}

fn abort() -> ! {
    println!("Aborted. Your branches are safe.");
    std::process::exit(1);
}
