//! Shared test utilities for CLI tests.

use std::sync::{Arc, Mutex};

use apprepo::{
    AppRepoConfig, ConsoleError, ListQuery, RepoDraft, RepoGateway, RepoId, RepoPage,
    ReviewGateway, ReviewSubmission, WorkspaceName,
};
use async_trait::async_trait;

/// Configuration with a server, token, and workspace set.
pub fn listing_config() -> AppRepoConfig {
    AppRepoConfig {
        server_url: Some("https://console.example.com".to_owned()),
        token: Some("secret-token".to_owned()),
        workspace: Some("demo".to_owned()),
        ..AppRepoConfig::default()
    }
}

type Captured<T> = Arc<Mutex<Vec<T>>>;

/// A gateway that records its inputs and returns preconfigured results.
#[derive(Clone, Default)]
pub struct CapturingGateway {
    /// Workspace and query of each list call.
    pub list_queries: Captured<(String, ListQuery)>,
    /// Identifiers of each delete call.
    pub deleted: Captured<Vec<String>>,
    /// Each submitted review.
    pub reviews: Captured<ReviewSubmission>,
    /// List response (consumed on first call).
    pub page: Arc<Mutex<Option<Result<RepoPage, ConsoleError>>>>,
    /// Result of delete and review calls.
    pub mutation_error: Option<ConsoleError>,
}

impl CapturingGateway {
    /// A gateway whose list call returns `page`.
    pub fn with_page(page: Result<RepoPage, ConsoleError>) -> Self {
        Self {
            page: Arc::new(Mutex::new(Some(page))),
            ..Self::default()
        }
    }

    /// A gateway whose delete and review calls fail with `error`.
    pub fn failing_mutations(error: ConsoleError) -> Self {
        Self {
            mutation_error: Some(error),
            ..Self::default()
        }
    }

    fn mutation_result(&self) -> Result<(), ConsoleError> {
        self.mutation_error.clone().map_or(Ok(()), Err)
    }
}

#[async_trait]
impl RepoGateway for CapturingGateway {
    async fn list_repos(
        &self,
        workspace: &WorkspaceName,
        query: &ListQuery,
    ) -> Result<RepoPage, ConsoleError> {
        self.list_queries
            .lock()
            .expect("captured mutex should be available")
            .push((workspace.as_str().to_owned(), query.clone()));

        self.page
            .lock()
            .expect("response mutex should be available")
            .take()
            .expect("response should only be consumed once")
    }

    async fn delete_repos(
        &self,
        _workspace: &WorkspaceName,
        ids: &[RepoId],
    ) -> Result<(), ConsoleError> {
        self.deleted
            .lock()
            .expect("captured mutex should be available")
            .push(ids.iter().map(|id| id.as_str().to_owned()).collect());
        self.mutation_result()
    }

    async fn create_repo(
        &self,
        _workspace: &WorkspaceName,
        _draft: &RepoDraft,
    ) -> Result<(), ConsoleError> {
        self.mutation_result()
    }

    async fn update_repo(
        &self,
        _workspace: &WorkspaceName,
        _id: &RepoId,
        _draft: &RepoDraft,
    ) -> Result<(), ConsoleError> {
        self.mutation_result()
    }
}

#[async_trait]
impl ReviewGateway for CapturingGateway {
    async fn submit_review(&self, submission: &ReviewSubmission) -> Result<(), ConsoleError> {
        self.reviews
            .lock()
            .expect("captured mutex should be available")
            .push(submission.clone());
        self.mutation_result()
    }
}
