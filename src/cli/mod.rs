//! CLI operation mode handlers.
//!
//! This module contains the implementations for the different operation
//! modes:
//! - [`repository_listing`]: Print one page of a workspace's repositories
//! - [`repo_delete`]: Delete repositories by identifier
//! - [`review_submit`]: Post a review action for an application version
//! - [`repo_tui`]: Interactive repository management screen
//!
//! Output formatting utilities are in [`output`].

use apprepo::{AccessToken, AppRepoConfig, ConsoleError, ConsoleLocator, WorkspaceName};

pub mod output;
pub mod repo_delete;
pub mod repo_tui;
pub mod review_submit;
pub mod repository_listing;

#[cfg(test)]
pub mod test_utils;

/// Server location and credentials shared by every mode.
pub struct Connection {
    /// Parsed console location.
    pub locator: ConsoleLocator,
    /// Validated access token.
    pub token: AccessToken,
}

impl Connection {
    /// Resolves the server URL and token from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::MissingServerUrl`] or
    /// [`ConsoleError::MissingToken`] when either is absent, and
    /// [`ConsoleError::InvalidUrl`] for an unparseable server URL.
    pub fn from_config(config: &AppRepoConfig) -> Result<Self, ConsoleError> {
        let locator = ConsoleLocator::parse(config.require_server_url()?)?;
        let token = AccessToken::new(config.resolve_token()?)?;
        Ok(Self { locator, token })
    }
}

/// Resolves and validates the configured workspace.
///
/// # Errors
///
/// Returns [`ConsoleError::MissingWorkspace`] when no workspace is set and
/// [`ConsoleError::InvalidIdentifier`] when it is unusable.
pub fn workspace(config: &AppRepoConfig) -> Result<WorkspaceName, ConsoleError> {
    WorkspaceName::new(config.require_workspace()?)
}
