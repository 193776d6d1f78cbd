//! ResponsiveMaintainer metric: how quickly maintainers close issues.
//!
//! The signal is the median time from creation to close across recently
//! closed issues (pull requests excluded). The score falls off linearly
//! from a perfect same-day median and reaches zero at a month.
//! Repositories with no closed issues to judge by score neutrally.

use super::{LOG_TARGET, issues};
use crate::hosting::{ApiResult, Client, Issue, RepoSpec};

/// Median close time (in days) at which the score reaches zero
const MAX_RESPONSE_DAYS: f64 = 30.0;

/// Score for repositories with no closed issues to judge by
const NEUTRAL_SCORE: f64 = 0.5;

const SECONDS_PER_DAY: f64 = 86400.0;

pub(super) async fn calculate(client: &Client, repo: &RepoSpec) -> f64 {
    match issues::fetch(client, repo).await {
        ApiResult::Success(issue_list) => score_responsiveness(&issue_list),
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

fn score_responsiveness(issue_list: &[Issue]) -> f64 {
    let ages: Vec<f64> = issue_list
        .iter()
        .filter(|i| i.pull_request.is_none())
        .filter_map(closed_age_days)
        .collect();

    median(&ages).map_or(NEUTRAL_SCORE, |median_days| (1.0 - median_days / MAX_RESPONSE_DAYS).clamp(0.0, 1.0))
}

/// Days from creation to close. Returns `None` if the issue was never closed.
#[expect(clippy::cast_precision_loss, reason = "acceptable for duration statistics")]
fn closed_age_days(issue: &Issue) -> Option<f64> {
    issue
        .closed_at
        .map(|closed_at| (closed_at - issue.created_at).num_seconds() as f64 / SECONDS_PER_DAY)
}

fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite() && *v >= 0.0).collect();
    if sorted.is_empty() {
        return None;
    }

    sorted.sort_by(|a, b| a.partial_cmp(b).expect("no NaN values should be present"));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some(f64::midpoint(sorted[mid - 1], sorted[mid]))
    } else {
        Some(sorted[mid])
    }
}
