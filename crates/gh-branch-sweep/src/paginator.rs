//! Paginated closed-PR retrieval
//!
//! Drives repeated list calls against the API, feeds each page through
//! the filter pipeline, and owns the running accumulator. Terminates on
//! the first empty page or once the accumulator reaches the configured
//! cap. Fetch errors are fatal and propagate unmodified.

use crate::candidate::Candidate;
use crate::filter::filter_page;
use chrono::Utc;
use gh_client::GitHubClient;
use gh_sweep_config::RunConfig;
use log::info;

/// Collect deletion candidates across all pages of closed PRs
///
/// Pages are fetched strictly sequentially starting at 1; no page is
/// skipped or re-fetched. The final page's surviving candidates are
/// kept whole even if they push the total past `max_candidates`.
pub async fn collect_candidates(
    client: &dyn GitHubClient,
    config: &RunConfig,
) -> anyhow::Result<Vec<Candidate>> {
    let mut candidates: Vec<Candidate> = Vec::new();
    let mut page: u32 = 1;

    loop {
        info!("Fetching closed PRs, page {}", page);
        let fetched = client
            .list_closed_pull_requests(&config.owner, &config.repo, page, config.page_size)
            .await?;

        if fetched.is_empty() {
            info!("No more closed PRs after page {}", page);
            break;
        }

        // Ages are computed against wall-clock now at filter time, so
        // later pages see marginally larger ages. Accepted drift.
        let survivors = filter_page(client, config, Utc::now(), fetched).await;
        candidates.extend(survivors);

        if candidates.len() >= config.max_candidates {
            info!(
                "Candidate cap of {} reached with {} candidates, stopping",
                config.max_candidates,
                candidates.len()
            );
            break;
        }

        page += 1;
    }

    info!("Discovery finished with {} candidates", candidates.len());
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{merged_months_ago, test_config, MockClient};

    fn capped_config(max: usize, per_page: u8) -> RunConfig {
        RunConfig::from_lookup(move |var| match var {
            "OWNER" => Some("octocat".to_string()),
            "REPO" => Some("hello-world".to_string()),
            "MAX_COUNT" => Some(max.to_string()),
            "PER_PAGE_COUNT" => Some(per_page.to_string()),
            _ => None,
        })
        .unwrap()
    }

    fn qualifying_page(first_number: u64, len: usize) -> Vec<gh_client::PullRequest> {
        let now = chrono::Utc::now();
        (0..len as u64)
            .map(|i| {
                let n = first_number + i;
                merged_months_ago(n, &format!("feature/{}", n), "main", 12.0, now)
            })
            .collect()
    }

    #[tokio::test]
    async fn test_stops_on_empty_page() {
        let mut client = MockClient::default();
        client.pages = vec![qualifying_page(1, 2), qualifying_page(3, 2)];
        let config = test_config();

        let candidates = collect_candidates(&client, &config).await.unwrap();

        assert_eq!(candidates.len(), 4);
        // Pages 1 and 2 had data; page 3 was the empty terminator
        assert_eq!(*client.fetched_pages.lock().unwrap(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_stops_at_cap_without_over_fetching() {
        // One more qualifying PR than the cap, spread across 3 pages
        let mut client = MockClient::default();
        client.pages = vec![
            qualifying_page(1, 2),
            qualifying_page(3, 2),
            qualifying_page(5, 1),
        ];
        let config = capped_config(4, 2);

        let candidates = collect_candidates(&client, &config).await.unwrap();

        // Page 2 crosses the cap; its survivors are kept whole and no
        // further page is fetched
        assert_eq!(candidates.len(), 4);
        assert_eq!(*client.fetched_pages.lock().unwrap(), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_final_page_is_never_truncated() {
        let mut client = MockClient::default();
        client.pages = vec![qualifying_page(1, 3)];
        let config = capped_config(2, 3);

        let candidates = collect_candidates(&client, &config).await.unwrap();

        assert_eq!(candidates.len(), 3);
        assert_eq!(*client.fetched_pages.lock().unwrap(), vec![1]);
    }

    #[tokio::test]
    async fn test_fetch_failure_is_fatal() {
        let mut client = MockClient::default();
        client.pages = vec![qualifying_page(1, 2), qualifying_page(3, 2)];
        client.fail_fetch_on_page = Some(2);
        let config = test_config();

        let result = collect_candidates(&client, &config).await;

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("page 2"));
    }

    #[tokio::test]
    async fn test_discovery_is_idempotent_on_unchanged_remote() {
        let mut client = MockClient::default();
        client.pages = vec![qualifying_page(1, 3)];
        let config = test_config();

        let first = collect_candidates(&client, &config).await.unwrap();
        let second = collect_candidates(&client, &config).await.unwrap();

        assert_eq!(first.len(), second.len());
        let ids = |cs: &[crate::candidate::Candidate]| {
            cs.iter()
                .map(|c| (c.number, c.branch_name.clone()))
                .collect::<Vec<_>>()
        };
        assert_eq!(ids(&first), ids(&second));
    }

    #[tokio::test]
    async fn test_single_qualifying_pr_end_to_end() {
        use crate::test_support::unmerged_pr;

        let now = chrono::Utc::now();
        let mut client = MockClient::default();
        client.pages = vec![vec![
            unmerged_pr(1, "feature/abandoned", "main"),
            merged_months_ago(2, "feature/recent", "main", 1.0, now),
            merged_months_ago(3, "feature/stale", "main", 4.0, now),
        ]];
        let config = test_config();

        let candidates = collect_candidates(&client, &config).await.unwrap();

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].number, 3);
        assert_eq!(candidates[0].branch_name, "feature/stale");
        assert!((candidates[0].age_months - 4.0).abs() < 0.01);
    }

    #[tokio::test]
    async fn test_no_candidates_from_empty_repo() {
        let client = MockClient::default();
        let config = test_config();

        let candidates = collect_candidates(&client, &config).await.unwrap();

        assert!(candidates.is_empty());
        assert_eq!(*client.fetched_pages.lock().unwrap(), vec![1]);
    }
}
