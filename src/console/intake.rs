//! High-level facade for workspace repository operations.
//!
//! `RepoIntake` turns table state into list queries and record selections
//! into deletion requests, so callers never format query strings or extract
//! identifiers themselves.

use super::error::ConsoleError;
use super::gateway::RepoGateway;
use super::locator::{RepoId, WorkspaceName};
use super::models::{RepoDraft, RepoPage, RepoRecord};
use super::query::{TableRequest, transform_request_params};

/// Aggregates repository operations for one workspace using a gateway.
///
/// # Example
///
/// ```ignore
/// use apprepo::console::{AccessToken, ConsoleLocator, HttpConsoleGateway, RepoIntake};
///
/// let locator = ConsoleLocator::parse("https://console.example.com")?;
/// let token = AccessToken::new("token")?;
/// let gateway = HttpConsoleGateway::for_token(&token, &locator, DEFAULT_TIMEOUT)?;
/// let intake = RepoIntake::new(&gateway, WorkspaceName::new("demo")?);
/// let page = intake.list(&TableRequest::new(ListParameters::repositories())).await?;
/// ```
pub struct RepoIntake<'client, Gateway>
where
    Gateway: RepoGateway + ?Sized,
{
    client: &'client Gateway,
    workspace: WorkspaceName,
}

impl<'client, Gateway> RepoIntake<'client, Gateway>
where
    Gateway: RepoGateway + ?Sized,
{
    /// Create a facade scoped to `workspace`.
    #[must_use]
    pub const fn new(client: &'client Gateway, workspace: WorkspaceName) -> Self {
        Self { client, workspace }
    }

    /// The workspace this facade operates on.
    #[must_use]
    pub const fn workspace(&self) -> &WorkspaceName {
        &self.workspace
    }

    /// Fetch the page described by the table state.
    ///
    /// # Errors
    ///
    /// Returns the gateway's error when the request fails or the response is
    /// malformed.
    pub async fn list(&self, request: &TableRequest) -> Result<RepoPage, ConsoleError> {
        let query = transform_request_params(request);
        tracing::debug!(
            workspace = self.workspace.as_str(),
            page = query.page,
            conditions = query.conditions.as_deref().unwrap_or_default(),
            "listing repositories"
        );
        self.client.list_repos(&self.workspace, &query).await
    }

    /// Delete every record in `selection` with a single request.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Validation`] for an empty selection, otherwise
    /// propagates gateway failures.
    pub async fn delete(&self, selection: &[RepoRecord]) -> Result<(), ConsoleError> {
        if selection.is_empty() {
            return Err(ConsoleError::Validation {
                message: "no repositories selected for deletion".to_owned(),
            });
        }
        let ids: Vec<RepoId> = selection.iter().map(|record| record.id.clone()).collect();
        self.delete_ids(&ids).await
    }

    /// Delete repositories by identifier with a single request.
    ///
    /// # Errors
    ///
    /// Propagates gateway failures.
    pub async fn delete_ids(&self, ids: &[RepoId]) -> Result<(), ConsoleError> {
        self.client.delete_repos(&self.workspace, ids).await
    }

    /// Create a repository, or update `existing` when editing.
    ///
    /// # Errors
    ///
    /// Propagates gateway failures.
    pub async fn save(
        &self,
        existing: Option<&RepoRecord>,
        draft: &RepoDraft,
    ) -> Result<(), ConsoleError> {
        if let Some(record) = existing {
            return self
                .client
                .update_repo(&self.workspace, &record.id, draft)
                .await;
        }
        self.client.create_repo(&self.workspace, draft).await
    }
}
