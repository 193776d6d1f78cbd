//! Shared CLI options and logging bootstrap.

use crate::Result;
use camino::Utf8PathBuf;
use clap::Args;
use ohno::IntoAppError;
use std::fs;

/// Options shared by every invocation of the tool
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// GitHub personal access token used to authenticate source-hosting API calls
    #[arg(long, value_name = "TOKEN", env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: String,

    /// Log verbosity (0 = silent, 1 = info, 2 = debug)
    #[arg(long, value_name = "LEVEL", env = "LOG_LEVEL", default_value_t = 0)]
    pub log_level: u8,

    /// Path of the log file [default: stderr]
    #[arg(long, value_name = "PATH", env = "LOG_FILE")]
    pub log_file: Option<Utf8PathBuf>,

    /// Per-request timeout in seconds for external API calls
    #[arg(long, value_name = "SECONDS", default_value_t = 30)]
    pub timeout: u64,

    /// Base URL of the source-hosting API
    #[arg(long, value_name = "URL", hide = true)]
    pub hosting_api_url: Option<String>,

    /// Base URL of the package-registry metadata endpoint
    #[arg(long, value_name = "URL", hide = true)]
    pub registry_url: Option<String>,
}

/// Initialize the logger from the verbosity level and optional log file.
///
/// Level 0 leaves logging uninitialized (silent); 1 maps to info and 2 (or
/// anything higher) to debug. `RUST_LOG` still takes precedence when set.
pub fn init_logging(log_level: u8, log_file: Option<&Utf8PathBuf>) -> Result<()> {
    if log_level == 0 {
        return Ok(());
    }

    let level = if log_level == 1 { "info" } else { "debug" };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);
    let mut builder = env_logger::Builder::from_env(env);
    let _ = builder
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(log_level >= 2);

    if let Some(path) = log_file {
        if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
            fs::create_dir_all(parent).into_app_err("creating log directory")?;
        }
        let file = fs::File::create(path).into_app_err("creating log file")?;
        let _ = builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    // Ignore re-initialization so repeated in-process invocations keep working
    let _ = builder.try_init();
    Ok(())
}
