//! Gateways for the console's app-store endpoints.
//!
//! Trait-based gateways keep the screen and CLI independent of HTTP so tests
//! can substitute mocks, while [`HttpConsoleGateway`] performs real requests
//! with `reqwest`.

mod client;
mod error_mapping;
mod rest;

pub use rest::{DEFAULT_TIMEOUT, HttpConsoleGateway};

use async_trait::async_trait;

use super::error::ConsoleError;
use super::locator::{RepoId, WorkspaceName};
use super::models::{RepoDraft, RepoPage};
use super::query::ListQuery;
use super::review::ReviewSubmission;

/// Gateway for workspace repository operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepoGateway: Send + Sync {
    /// Fetch one page of repositories.
    async fn list_repos(
        &self,
        workspace: &WorkspaceName,
        query: &ListQuery,
    ) -> Result<RepoPage, ConsoleError>;

    /// Delete all listed repositories in a single request.
    async fn delete_repos(
        &self,
        workspace: &WorkspaceName,
        ids: &[RepoId],
    ) -> Result<(), ConsoleError>;

    /// Register a new repository.
    async fn create_repo(
        &self,
        workspace: &WorkspaceName,
        draft: &RepoDraft,
    ) -> Result<(), ConsoleError>;

    /// Update an existing repository.
    async fn update_repo(
        &self,
        workspace: &WorkspaceName,
        id: &RepoId,
        draft: &RepoDraft,
    ) -> Result<(), ConsoleError>;
}

/// Gateway for application version reviews.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewGateway: Send + Sync {
    /// Post a review action for an application version.
    async fn submit_review(&self, submission: &ReviewSubmission) -> Result<(), ConsoleError>;
}
