//! Command-line interface and batch orchestration for repo-trust
//!
//! This module parses the command line, bootstraps logging, and drives the
//! scoring pipeline end to end: read the URL file, validate each line,
//! resolve and score valid URLs, and emit one NDJSON record per URL on the
//! host's output stream.
//!
//! # Execution Flow
//!
//! The `run` function parses arguments with clap and hands off to
//! `process_urls`, which walks the batch in input order. Per-URL failures
//! (malformed lines, degraded metrics) never abort the batch; only an
//! unreadable URL file or missing configuration terminates the run.
//!
//! The [`Host`] trait abstracts the process environment (stdout, stderr,
//! exit) so the whole pipeline can be exercised in tests with in-memory
//! buffers.

mod common;
mod host;
mod run;
mod score;

pub use common::CommonArgs;
pub use host::Host;
pub use run::run;
pub use score::process_urls;
