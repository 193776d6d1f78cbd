//! Source-hosting API access.
//!
//! This module identifies repositories from resolved URLs and talks to a
//! GitHub-style REST API to fetch the raw signals the metric evaluators
//! consume: discussions, README metadata, contributor lists, issue history,
//! and license information.
//!
//! Every API call is classified into an [`ApiResult`] so that callers can
//! distinguish "the data does not exist" (404), "the feature is disabled"
//! (410), and genuine failures without ever propagating an error across an
//! evaluator boundary.

mod client;
mod repo_spec;

pub use client::{ApiResult, Client, Contributor, Discussion, Issue, IssueState, PullRequestMarker, Readme};
pub use repo_spec::RepoSpec;
