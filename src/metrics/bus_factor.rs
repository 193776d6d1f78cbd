//! BusFactor metric: contributor diversity.
//!
//! Linear in the number of contributors up to a healthy threshold, clamped
//! at 1. Any fetch failure degrades to zero.

use super::LOG_TARGET;
use crate::hosting::{ApiResult, Client, Contributor, RepoSpec};

/// Contributor count considered healthy; at or above this the score is 1
const HEALTHY_CONTRIBUTOR_COUNT: f64 = 30.0;

/// One page is plenty: the score saturates well before 100 contributors
const CONTRIBUTOR_PAGE_SIZE: u8 = 100;

pub(super) async fn calculate(client: &Client, repo: &RepoSpec) -> f64 {
    let path = format!(
        "/repos/{}/{}/contributors?per_page={CONTRIBUTOR_PAGE_SIZE}",
        repo.owner(),
        repo.repo()
    );

    match client.get_json::<Vec<Contributor>>(&path).await {
        ApiResult::Success(contributors) => score_contributors(contributors.len()),
        ApiResult::NotFound | ApiResult::Gone => {
            log::debug!(target: LOG_TARGET, "Contributor list is unavailable for '{repo}'");
            0.0
        }
        ApiResult::Failed(e) => {
            log::debug!(target: LOG_TARGET, "Could not fetch contributors for '{repo}': {e:#}");
            0.0
        }
    }
}

fn score_contributors(count: usize) -> f64 {
    #[expect(clippy::cast_precision_loss, reason = "at most one page of contributors is fetched")]
    let count = count as f64;
    (count / HEALTHY_CONTRIBUTOR_COUNT).min(1.0)
}
