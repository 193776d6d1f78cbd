//! A tool to score the trustworthiness of software packages and repositories.
//!
//! # Overview
//!
//! `repo-trust` takes a file containing candidate URLs (one per line), resolves
//! package-registry URLs to their declared source repositories, evaluates a set
//! of independent trust metrics against each repository, and emits one JSON
//! record per valid URL on stdout.
//!
//! # Quick Start
//!
//! ```bash
//! export GITHUB_TOKEN=ghp_xxxxxxxxxxxxxxxxxxxx
//! repo-trust urls.txt
//! ```
//!
//! Each output line looks like:
//!
//! ```json
//! {"URL":"https://github.com/expressjs/express","NetScore":0.71,"NetScore_Latency":1.204,...}
//! ```
//!
//! # Input
//!
//! The URL file contains one candidate URL per line; blank lines are ignored.
//! Both repository URLs and npm package URLs are accepted:
//!
//! ```text
//! https://github.com/tokio-rs/tokio
//! https://www.npmjs.com/package/express
//! ```
//!
//! Invalid lines produce a warning on stderr and are skipped; they never abort
//! the batch. An unreadable URL file aborts the whole run.
//!
//! # Logging
//!
//! Diagnostic output is controlled with `--log-level` (0 = silent, 1 = info,
//! 2 = debug) and optionally redirected to a file with `--log-file`. Both can
//! also be supplied through the `LOG_LEVEL` and `LOG_FILE` environment
//! variables.
//!
//! # Exit Codes
//!
//! - `0`: the batch was processed (individual URLs may still have been skipped)
//! - `1`: a fatal condition occurred (unreadable URL file, missing credential);
//!   the condition is reported as a single JSON error record on stderr

use repo_trust::{Host, run};
use std::io::Write;
use std::io::{stderr, stdout};

/// Default host that talks to the real process environment.
#[derive(Debug, Clone, Default)]
pub struct RealHost;

impl Host for RealHost {
    fn output(&mut self) -> impl Write {
        stdout()
    }

    fn error(&mut self) -> impl Write {
        stderr()
    }

    fn exit(&mut self, code: i32) {
        std::process::exit(code);
    }
}

#[tokio::main]
async fn main() {
    // Fatal conditions are reported through the host inside the pipeline;
    // with RealHost the exit happens there, so this is just a backstop.
    if run(&mut RealHost, std::env::args()).await.is_err() {
        std::process::exit(1);
    }
}
