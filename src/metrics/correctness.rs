//! Correctness metric: issue hygiene.
//!
//! A repository whose filed issues get closed signals working software and an
//! attentive project. The score is the fraction of issues (pull requests
//! excluded) that are closed. A repository with no issue history at all is
//! scored neutrally rather than punished.

use super::{LOG_TARGET, issues};
use crate::hosting::{ApiResult, Client, Issue, IssueState, RepoSpec};

/// Score for repositories with no issue history to judge by
const NEUTRAL_SCORE: f64 = 0.5;

pub(super) async fn calculate(client: &Client, repo: &RepoSpec) -> f64 {
    match issues::fetch(client, repo).await {
        ApiResult::Success(issue_list) => score_issue_hygiene(&issue_list),
        ApiResult::NotFound | ApiResult::Gone => {
            log::debug!(target: LOG_TARGET, "Issue history is unavailable for '{repo}'");
            0.0
        }
        ApiResult::Failed(e) => {
            log::debug!(target: LOG_TARGET, "Could not fetch issues for '{repo}': {e:#}");
            0.0
        }
    }
}

#[expect(clippy::cast_precision_loss, reason = "issue counts are far below the precision limit")]
fn score_issue_hygiene(issue_list: &[Issue]) -> f64 {
    let mut total = 0u64;
    let mut closed = 0u64;

    for issue in issue_list.iter().filter(|i| i.pull_request.is_none()) {
        total += 1;
        if issue.state == IssueState::Closed {
            closed += 1;
        }
    }

    if total == 0 {
        return NEUTRAL_SCORE;
    }

    closed as f64 / total as f64
}
