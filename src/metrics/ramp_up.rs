//! RampUp metric: how approachable a repository is for newcomers.
//!
//! Combines two signals: the amount of community discussion and the size of
//! the README. The two components are fetched independently and each one
//! degrades to zero on its own; the total is capped at 1.

use super::LOG_TARGET;
use crate::hosting::{ApiResult, Client, Discussion, Readme, RepoSpec};

/// Discussion count at which the discussion component maxes out
const DISCUSSION_TARGET: f64 = 10.0;

/// Maximum contribution of the discussion component
const MAX_DISCUSSION_SCORE: f64 = 0.5;

/// Maximum contribution of the README component
const MAX_README_SCORE: f64 = 0.75;

/// README size considered ideal; larger READMEs score inversely
const IDEAL_README_BYTES: f64 = 10_240.0;

pub(super) async fn calculate(client: &Client, repo: &RepoSpec) -> f64 {
    let discussions = discussion_component(client, repo).await;
    let readme = readme_component(client, repo).await;

    (discussions + readme).min(1.0)
}

async fn discussion_component(client: &Client, repo: &RepoSpec) -> f64 {
    let path = format!("/repos/{}/{}/discussions?per_page=10", repo.owner(), repo.repo());

    match client.get_json::<Vec<Discussion>>(&path).await {
        ApiResult::Success(discussions) => score_discussions(discussions.len()),
        ApiResult::NotFound | ApiResult::Gone => {
            log::debug!(target: LOG_TARGET, "Discussions are absent or disabled for '{repo}'");
            0.0
        }
        ApiResult::Failed(e) => {
            log::debug!(target: LOG_TARGET, "Could not fetch discussions for '{repo}': {e:#}");
            0.0
        }
    }
}

async fn readme_component(client: &Client, repo: &RepoSpec) -> f64 {
    let path = format!("/repos/{}/{}/readme", repo.owner(), repo.repo());

    match client.get_json::<Readme>(&path).await {
        ApiResult::Success(readme) => score_readme(readme.size),
        ApiResult::NotFound | ApiResult::Gone => {
            log::debug!(target: LOG_TARGET, "No README found for '{repo}'");
            0.0
        }
        ApiResult::Failed(e) => {
            log::debug!(target: LOG_TARGET, "Could not fetch README for '{repo}': {e:#}");
            0.0
        }
    }
}

/// Linear up to the target count, capped at the component maximum.
fn score_discussions(count: usize) -> f64 {
    #[expect(clippy::cast_precision_loss, reason = "at most one page of discussions is fetched")]
    let count = count as f64;
    MAX_DISCUSSION_SCORE * (count / DISCUSSION_TARGET).min(1.0)
}

/// Linear toward the ideal length, then inverse for excessively long READMEs.
#[expect(clippy::cast_precision_loss, reason = "README sizes are far below the precision limit")]
fn score_readme(bytes: u64) -> f64 {
    if bytes == 0 {
        return 0.0;
    }

    let bytes = bytes as f64;
    if bytes <= IDEAL_README_BYTES {
        MAX_README_SCORE * (bytes / IDEAL_README_BYTES)
    } else {
        MAX_README_SCORE * (IDEAL_README_BYTES / bytes)
    }
}
