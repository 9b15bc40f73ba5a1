//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.apprepo.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `APPREPO_SERVER_URL`, `APPREPO_TOKEN`, or
//!    the shared `CONSOLE_TOKEN`
//! 4. **Command-line arguments** – `--server-url`/`-s`, `--token`/`-t`, ...
//!
//! # Configuration File
//!
//! Place `.apprepo.toml` in the current directory, home directory, or
//! XDG config directory with:
//!
//! ```toml
//! server_url = "https://console.example.com"
//! token = "eyJhbGciOi..."
//! workspace = "demo"
//! limit = 20
//! ```

use std::env;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::console::error::ConsoleError;
use crate::console::locator::RepoId;
use crate::console::pagination::{DEFAULT_PAGE_LIMIT, validate_pagination};
use crate::console::review::ReviewAction;

/// Environment variable consulted when no token is configured.
pub const CONSOLE_TOKEN_ENV: &str = "CONSOLE_TOKEN";

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Operation mode determined by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Post a review action for an application version.
    SubmitReview,
    /// Delete the listed repositories and exit.
    DeleteRepos,
    /// Interactive repository manager.
    RepoTui,
    /// Print one page of repositories.
    RepoListing,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `APPREPO_SERVER_URL` or `--server-url`: Console base URL
/// - `APPREPO_TOKEN`, `CONSOLE_TOKEN`, or `--token`: Bearer token
/// - `APPREPO_WORKSPACE` or `--workspace`: Workspace name
/// - `APPREPO_KEYWORD` or `--keyword`: Name search keyword
///
/// # Example
///
/// ```no_run
/// use apprepo::AppRepoConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = AppRepoConfig::load().expect("failed to load configuration");
/// let server = config.require_server_url().expect("server URL required");
/// let token = config.resolve_token().expect("token required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "APPREPO",
    discovery(
        dotfile_name = ".apprepo.toml",
        config_file_name = "apprepo.toml",
        app_name = "apprepo"
    )
)]
pub struct AppRepoConfig {
    /// Base URL of the console API server.
    ///
    /// Can be provided via:
    /// - CLI: `--server-url <URL>` or `-s <URL>`
    /// - Environment: `APPREPO_SERVER_URL`
    /// - Config file: `server_url = "..."`
    #[ortho_config(cli_short = 's')]
    pub server_url: Option<String>,

    /// Bearer token for API authentication.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `APPREPO_TOKEN` or `CONSOLE_TOKEN`
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Workspace whose repositories are managed.
    #[ortho_config(cli_short = 'w')]
    pub workspace: Option<String>,

    /// Keyword matched against repository names when listing.
    #[ortho_config(cli_short = 'k')]
    pub keyword: Option<String>,

    /// Page to print in listing mode (1-based).
    #[ortho_config(cli_short = 'p')]
    pub page: u32,

    /// Page size for listing mode and the interactive table.
    #[ortho_config(cli_short = 'l')]
    pub limit: u32,

    /// Comma-separated repository identifiers to delete.
    ///
    /// When set, the listed repositories are removed with one request and the
    /// program exits.
    #[ortho_config()]
    pub delete_repos: Option<String>,

    /// Application to review. Requires `version_id`.
    #[ortho_config()]
    pub app_id: Option<String>,

    /// Application version to review. Requires `app_id`.
    #[ortho_config()]
    pub version_id: Option<String>,

    /// Review verb: submit, cancel, pass, reject, suspend, or recover.
    ///
    /// Defaults to `submit` when unset.
    #[ortho_config()]
    pub review_action: Option<String>,

    /// Optional message attached to the review.
    #[ortho_config()]
    pub review_message: Option<String>,

    /// Launches the interactive repository manager.
    ///
    /// Can be provided via:
    /// - CLI: `--tui` / `-T`
    /// - Config file: `tui = true`
    ///
    /// Note: `ortho_config` does not load boolean values from the environment.
    #[ortho_config(cli_short = 'T')]
    pub tui: bool,

    /// HTTP request timeout in seconds.
    #[ortho_config()]
    pub timeout_seconds: u64,
}

impl Default for AppRepoConfig {
    fn default() -> Self {
        Self {
            server_url: None,
            token: None,
            workspace: None,
            keyword: None,
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
            delete_repos: None,
            app_id: None,
            version_id: None,
            review_action: None,
            review_message: None,
            tui: false,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl AppRepoConfig {
    /// Resolves the token from configuration or the `CONSOLE_TOKEN`
    /// environment variable. A blank configured token counts as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::MissingToken`] when no source provides a
    /// non-blank value.
    pub fn resolve_token(&self) -> Result<String, ConsoleError> {
        let non_blank = |token: &String| !token.trim().is_empty();
        self.token
            .clone()
            .filter(non_blank)
            .or_else(|| env::var(CONSOLE_TOKEN_ENV).ok().filter(non_blank))
            .ok_or(ConsoleError::MissingToken)
    }

    /// Returns the server URL or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::MissingServerUrl`] when no URL is configured.
    pub fn require_server_url(&self) -> Result<&str, ConsoleError> {
        self.server_url
            .as_deref()
            .ok_or(ConsoleError::MissingServerUrl)
    }

    /// Returns the workspace or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::MissingWorkspace`] when no workspace is
    /// configured.
    pub fn require_workspace(&self) -> Result<&str, ConsoleError> {
        self.workspace
            .as_deref()
            .ok_or(ConsoleError::MissingWorkspace)
    }

    /// Request timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Parses the configured review verb, defaulting to `submit`.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Validation`] for an unknown verb.
    pub fn review_action(&self) -> Result<ReviewAction, ConsoleError> {
        self.review_action
            .as_deref()
            .map_or(Ok(ReviewAction::default()), str::parse)
    }

    /// Splits `delete_repos` into validated identifiers, skipping empty
    /// entries.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Configuration`] when no identifiers remain and
    /// [`ConsoleError::InvalidIdentifier`] when an entry is unusable.
    pub fn delete_targets(&self) -> Result<Vec<RepoId>, ConsoleError> {
        let ids = self
            .delete_repos
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .filter(|entry| !entry.trim().is_empty())
            .map(RepoId::new)
            .collect::<Result<Vec<_>, _>>()?;

        if ids.is_empty() {
            return Err(ConsoleError::Configuration {
                message: "delete_repos must list at least one repository id".to_owned(),
            });
        }
        Ok(ids)
    }

    /// Checks the configuration for contradictory or out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::InvalidPagination`] when `page` or `limit` is
    /// out of range and [`ConsoleError::Configuration`] when the timeout is
    /// zero or only one of `app_id` and `version_id` is set.
    pub fn validate(&self) -> Result<(), ConsoleError> {
        validate_pagination(self.page, self.limit)?;
        if self.timeout_seconds == 0 {
            return Err(ConsoleError::Configuration {
                message: "timeout_seconds must be at least 1".to_owned(),
            });
        }

        match (&self.app_id, &self.version_id) {
            (Some(_), None) => Err(ConsoleError::Configuration {
                message: "version_id is required when app_id is set (use --version-id)".to_owned(),
            }),
            (None, Some(_)) => Err(ConsoleError::Configuration {
                message: "app_id is required when version_id is set (use --app-id)".to_owned(),
            }),
            _ => Ok(()),
        }
    }

    /// Determines the operation mode based on provided configuration.
    ///
    /// A complete review target wins, then a deletion list, then the TUI
    /// flag; listing is the fallback.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.app_id.is_some() && self.version_id.is_some() {
            OperationMode::SubmitReview
        } else if self.delete_repos.is_some() {
            OperationMode::DeleteRepos
        } else if self.tui {
            OperationMode::RepoTui
        } else {
            OperationMode::RepoListing
        }
    }
}

#[cfg(test)]
mod tests;
