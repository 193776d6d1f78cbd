//! Batch orchestration: drive the scoring pipeline over a file of URLs.

use super::Host;
use super::common::{self, CommonArgs};
use crate::scoring::Scorer;
use crate::{Result, reports, validate};
use camino::Utf8Path;
use core::time::Duration;
use ohno::IntoAppError;
use std::fs;
use std::io::Write as _;

const LOG_TARGET: &str = "     batch";

/// Process every candidate URL in `url_file`, in input order.
///
/// Invalid lines get a warning on the host's error stream and are skipped;
/// each valid URL produces exactly one NDJSON record on the host's output
/// stream. An unreadable URL file is fatal: it aborts the whole run, and
/// the condition is reported as a single JSON error record on the host's
/// error stream before the host is told to exit.
pub async fn process_urls<H: Host>(host: &mut H, url_file: &Utf8Path, args: &CommonArgs) -> Result<()> {
    match process_urls_inner(host, url_file, args).await {
        Ok(()) => Ok(()),
        Err(e) => {
            let record = serde_json::json!({ "Error": format!("{e:#}") });
            let _ = writeln!(host.error(), "{record}");
            host.exit(1);
            Err(e)
        }
    }
}

async fn process_urls_inner<H: Host>(host: &mut H, url_file: &Utf8Path, args: &CommonArgs) -> Result<()> {
    common::init_logging(args.log_level, args.log_file.as_ref())?;

    let urls = fs::read_to_string(url_file).into_app_err_with(|| format!("unable to read URL file '{url_file}'"))?;

    let scorer = Scorer::new(
        &args.github_token,
        args.hosting_api_url.as_deref(),
        args.registry_url.as_deref(),
        Duration::from_secs(args.timeout),
    )?;

    for line in urls.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let Some(url) = validate::parse_valid_url(line) else {
            log::warn!(target: LOG_TARGET, "Skipping invalid URL: {line}");
            writeln!(host.error(), "Invalid URL: {line}")?;
            continue;
        };

        log::info!(target: LOG_TARGET, "Processing URL: {url}");
        let record = scorer.score(&url, line).await;
        writeln!(host.output(), "{}", reports::ndjson::generate(&record)?)?;
    }

    Ok(())
}
