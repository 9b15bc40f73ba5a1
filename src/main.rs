//! apprepo CLI entrypoint for managing a workspace's app repositories.

use std::io::{self, Write};
use std::process::ExitCode;

use apprepo::{AppRepoConfig, ConsoleError, OperationMode};
use ortho_config::OrthoConfig;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::debug!(error = ?error, "command failed");
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

/// Installs a stderr subscriber filtered by `RUST_LOG`, defaulting to `warn`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

async fn run() -> Result<(), ConsoleError> {
    let config = load_config()?;
    config.validate()?;

    match config.operation_mode() {
        OperationMode::SubmitReview => cli::review_submit::run(&config).await,
        OperationMode::DeleteRepos => cli::repo_delete::run(&config).await,
        OperationMode::RepoTui => cli::repo_tui::run(&config).await,
        OperationMode::RepoListing => cli::repository_listing::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ConsoleError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<AppRepoConfig, ConsoleError> {
    AppRepoConfig::load().map_err(|error| ConsoleError::Configuration {
        message: error.to_string(),
    })
}
