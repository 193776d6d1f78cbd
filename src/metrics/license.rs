//! License metric: whether the repository declares a license.
//!
//! Exactly 1 when the license lookup succeeds, exactly 0 when the repository
//! reports no license (404), and 0 after logging for any other failure. No
//! other value is possible.

use super::LOG_TARGET;
use crate::hosting::{ApiResult, Client, RepoSpec};

pub(super) async fn calculate(client: &Client, repo: &RepoSpec) -> f64 {
    let path = format!("/repos/{}/{}/license", repo.owner(), repo.repo());

    match client.get_status(&path).await {
        ApiResult::Success(()) => 1.0,
        ApiResult::NotFound => 0.0,
        ApiResult::Gone => {
            log::debug!(target: LOG_TARGET, "License endpoint is gone for '{repo}'");
            0.0
        }
        ApiResult::Failed(e) => {
            log::debug!(target: LOG_TARGET, "Could not fetch license for '{repo}': {e:#}");
            0.0
        }
    }
}
