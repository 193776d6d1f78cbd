//! Command-line parsing and dispatch for repo-trust

use super::{CommonArgs, process_urls};
use crate::{Host, Result};
use camino::Utf8PathBuf;
use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "repo-trust", version, author, long_about = None)]
#[command(about = "Score the trustworthiness of package and repository URLs")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    /// File containing one candidate URL per line
    #[arg(value_name = "URL_FILE")]
    url_file: Utf8PathBuf,

    #[command(flatten)]
    common: CommonArgs,
}

/// Parse command-line arguments and execute the scoring pipeline
///
/// This function is designed to be called from main.rs with the program
/// arguments; tests drive it directly with a synthetic argument vector
/// and an in-memory [`Host`].
///
/// # Errors
///
/// Returns an error if argument parsing fails, if the URL file cannot be
/// read, or if the scoring pipeline cannot be set up.
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let cli = Cli::parse_from(args);
    process_urls(host, &cli.url_file, &cli.common).await
}
