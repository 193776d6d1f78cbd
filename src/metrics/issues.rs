//! Shared issue-history fetch used by the issue-derived metrics.
//!
//! Each evaluator performs its own fetch; this module only factors out the
//! endpoint shape. One page of the most recent issues (and PRs) is enough
//! signal for both hygiene and responsiveness.

use crate::hosting::{ApiResult, Client, Issue, RepoSpec};

const ISSUE_PAGE_SIZE: u8 = 100;

pub(super) async fn fetch(client: &Client, repo: &RepoSpec) -> ApiResult<Vec<Issue>> {
    let path = format!(
        "/repos/{}/{}/issues?state=all&per_page={ISSUE_PAGE_SIZE}",
        repo.owner(),
        repo.repo()
    );

    client.get_json(&path).await
}
