//! `reqwest`-backed gateway for the app-store endpoints.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};

use crate::console::error::ConsoleError;
use crate::console::locator::{AccessToken, ConsoleLocator, RepoId, WorkspaceName};
use crate::console::models::{ApiRepoList, RepoDraft, RepoPage};
use crate::console::pagination::validate_pagination;
use crate::console::query::ListQuery;
use crate::console::review::ReviewSubmission;

use super::client::build_http_client;
use super::error_mapping::{extract_message, map_decode_error, map_http_error, map_transport_error};
use super::{RepoGateway, ReviewGateway};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP gateway authenticated with a bearer token.
#[derive(Debug, Clone)]
pub struct HttpConsoleGateway {
    client: Client,
    locator: ConsoleLocator,
    token: AccessToken,
}

impl HttpConsoleGateway {
    /// Creates a gateway from an existing client.
    #[must_use]
    pub const fn new(client: Client, locator: ConsoleLocator, token: AccessToken) -> Self {
        Self {
            client,
            locator,
            token,
        }
    }

    /// Builds a gateway with its own HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Configuration`] when the HTTP client cannot be
    /// constructed.
    pub fn for_token(
        token: &AccessToken,
        locator: &ConsoleLocator,
        timeout: Duration,
    ) -> Result<Self, ConsoleError> {
        let client = build_http_client(timeout)?;
        Ok(Self::new(client, locator.clone(), token.clone()))
    }

    /// The locator this gateway targets.
    #[must_use]
    pub const fn locator(&self) -> &ConsoleLocator {
        &self.locator
    }

    async fn send(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> Result<Response, ConsoleError> {
        let response = request
            .bearer_auth(self.token.value())
            .send()
            .await
            .map_err(|error| map_transport_error(operation, &error))?;

        let status = response.status();
        tracing::debug!(operation, status = status.as_u16(), "console responded");
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(operation, status = status.as_u16(), "console request failed");
        Err(map_http_error(operation, status, extract_message(&body)))
    }
}

#[async_trait]
impl RepoGateway for HttpConsoleGateway {
    async fn list_repos(
        &self,
        workspace: &WorkspaceName,
        query: &ListQuery,
    ) -> Result<RepoPage, ConsoleError> {
        const OPERATION: &str = "list repositories";

        validate_pagination(query.page, query.limit)?;

        let request = self
            .client
            .get(self.locator.repos_url(workspace))
            .query(&query.to_pairs());
        let response = self.send(OPERATION, request).await?;
        let body = response
            .text()
            .await
            .map_err(|error| map_transport_error(OPERATION, &error))?;

        let list: ApiRepoList =
            serde_json::from_str(&body).map_err(|error| map_decode_error(OPERATION, &error))?;
        list.into_page(workspace, query.page, query.limit)
    }

    async fn delete_repos(
        &self,
        workspace: &WorkspaceName,
        ids: &[RepoId],
    ) -> Result<(), ConsoleError> {
        if ids.is_empty() {
            return Err(ConsoleError::Validation {
                message: "no repositories selected for deletion".to_owned(),
            });
        }

        let body: Vec<&str> = ids.iter().map(RepoId::as_str).collect();
        let request = self
            .client
            .delete(self.locator.repos_url(workspace))
            .json(&body);
        self.send("delete repositories", request).await?;
        tracing::info!(workspace = workspace.as_str(), count = ids.len(), "repositories deleted");
        Ok(())
    }

    async fn create_repo(
        &self,
        workspace: &WorkspaceName,
        draft: &RepoDraft,
    ) -> Result<(), ConsoleError> {
        let request = self
            .client
            .post(self.locator.repos_url(workspace))
            .json(draft);
        self.send("create repository", request).await?;
        Ok(())
    }

    async fn update_repo(
        &self,
        workspace: &WorkspaceName,
        id: &RepoId,
        draft: &RepoDraft,
    ) -> Result<(), ConsoleError> {
        let request = self
            .client
            .patch(self.locator.repo_url(workspace, id))
            .json(draft);
        self.send("update repository", request).await?;
        Ok(())
    }
}

#[async_trait]
impl ReviewGateway for HttpConsoleGateway {
    async fn submit_review(&self, submission: &ReviewSubmission) -> Result<(), ConsoleError> {
        let url = self
            .locator
            .review_action_url(&submission.app_id, &submission.version_id);
        let request = self.client.post(url).json(&submission.data);
        self.send("submit review", request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rstest::rstest;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::HttpConsoleGateway;
    use crate::console::error::ConsoleError;
    use crate::console::gateway::{RepoGateway, ReviewGateway};
    use crate::console::locator::{
        AccessToken, AppId, ConsoleLocator, RepoId, VersionId, WorkspaceName,
    };
    use crate::console::models::RepoDraft;
    use crate::console::query::{ListParameters, TableRequest, transform_request_params};
    use crate::console::review::{ReviewAction, ReviewSubmission};

    const REPOS_PATH: &str = "/kapis/openpitrix.io/v1/workspaces/demo/repos";

    fn gateway_for(server: &MockServer) -> HttpConsoleGateway {
        let locator = ConsoleLocator::parse(&server.uri()).expect("should parse server URI");
        let token = AccessToken::new("valid-token").expect("token should be valid");
        HttpConsoleGateway::for_token(&token, &locator, Duration::from_secs(5))
            .expect("should create gateway")
    }

    fn demo() -> WorkspaceName {
        WorkspaceName::new("demo").expect("valid workspace")
    }

    #[tokio::test]
    async fn list_repos_sends_formatted_query_and_renames_total() {
        let server = MockServer::start().await;
        let gateway = gateway_for(&server);

        Mock::given(method("GET"))
            .and(path(REPOS_PATH))
            .and(header("authorization", "Bearer valid-token"))
            .and(query_param("page", "2"))
            .and(query_param("limit", "10"))
            .and(query_param("order", "create_time"))
            .and(query_param("reverse", "true"))
            .and(query_param("conditions", "status=active,keyword=nginx"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "total_count": 11,
                "items": [{
                    "metadata": { "name": "repo-nginx", "uid": "u-1" },
                    "spec": { "name": "nginx charts", "url": "https://nginx.example.com" },
                    "status": { "state": "syncing" }
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let request = TableRequest::new(ListParameters::repositories())
            .with_page_index(1)
            .with_keyword(Some("nginx"));
        let page = gateway
            .list_repos(&demo(), &transform_request_params(&request))
            .await
            .expect("request should succeed");

        assert_eq!(page.total_items, 11);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.page_info.current_page(), 2);
        assert!(!page.page_info.has_next());
        let record = page.items.first().expect("one record");
        assert_eq!(record.display_name(), "nginx charts");
        assert_eq!(record.workspace, demo());
    }

    #[tokio::test]
    async fn list_repos_rejects_malformed_payload() {
        let server = MockServer::start().await;
        let gateway = gateway_for(&server);

        Mock::given(method("GET"))
            .and(path(REPOS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
            .mount(&server)
            .await;

        let query = transform_request_params(&TableRequest::new(ListParameters::repositories()));
        let error = gateway
            .list_repos(&demo(), &query)
            .await
            .expect_err("payload without total_count should fail");

        assert!(
            matches!(error, ConsoleError::MalformedResponse { .. }),
            "expected MalformedResponse, got {error:?}"
        );
    }

    #[tokio::test]
    async fn list_repos_rejects_invalid_pagination_without_calling_server() {
        let server = MockServer::start().await;
        let gateway = gateway_for(&server);
        let query = transform_request_params(
            &TableRequest::new(ListParameters::repositories()).with_limit(0),
        );

        let error = gateway
            .list_repos(&demo(), &query)
            .await
            .expect_err("zero limit should fail");

        assert!(matches!(error, ConsoleError::InvalidPagination { .. }));
        let received = server.received_requests().await.unwrap_or_default();
        assert!(received.is_empty(), "no request should have been sent");
    }

    #[rstest]
    #[case(401, "Authentication")]
    #[case(500, "Api")]
    #[tokio::test]
    async fn list_repos_maps_error_statuses(#[case] status: u16, #[case] expected: &str) {
        let server = MockServer::start().await;
        let gateway = gateway_for(&server);

        Mock::given(method("GET"))
            .and(path(REPOS_PATH))
            .respond_with(
                ResponseTemplate::new(status).set_body_json(json!({ "message": "nope" })),
            )
            .mount(&server)
            .await;

        let query = transform_request_params(&TableRequest::new(ListParameters::repositories()));
        let error = gateway
            .list_repos(&demo(), &query)
            .await
            .expect_err("request should fail");

        let actual = match &error {
            ConsoleError::Authentication { .. } => "Authentication",
            ConsoleError::Api { .. } => "Api",
            _ => "other",
        };
        assert_eq!(actual, expected, "unexpected error: {error:?}");
        assert!(error.to_string().contains("nope"), "message lost: {error}");
    }

    #[tokio::test]
    async fn delete_repos_sends_all_ids_in_one_request() {
        let server = MockServer::start().await;
        let gateway = gateway_for(&server);

        Mock::given(method("DELETE"))
            .and(path(REPOS_PATH))
            .and(body_json(json!(["repo-a", "repo-b"])))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let ids = [
            RepoId::new("repo-a").expect("valid id"),
            RepoId::new("repo-b").expect("valid id"),
        ];
        gateway
            .delete_repos(&demo(), &ids)
            .await
            .expect("delete should succeed");
    }

    #[tokio::test]
    async fn delete_repos_requires_ids() {
        let server = MockServer::start().await;
        let gateway = gateway_for(&server);

        let error = gateway
            .delete_repos(&demo(), &[])
            .await
            .expect_err("empty delete should fail");

        assert!(matches!(error, ConsoleError::Validation { .. }));
    }

    #[tokio::test]
    async fn create_and_update_send_draft() {
        let server = MockServer::start().await;
        let gateway = gateway_for(&server);
        let draft = RepoDraft::new("Bitnami", "https://charts.bitnami.com/bitnami", None)
            .expect("valid draft");
        let expected_body = json!({
            "name": "Bitnami",
            "url": "https://charts.bitnami.com/bitnami"
        });

        Mock::given(method("POST"))
            .and(path(REPOS_PATH))
            .and(body_json(expected_body.clone()))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PATCH"))
            .and(path(format!("{REPOS_PATH}/repo-a")))
            .and(body_json(expected_body))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        gateway
            .create_repo(&demo(), &draft)
            .await
            .expect("create should succeed");
        gateway
            .update_repo(&demo(), &RepoId::new("repo-a").expect("valid id"), &draft)
            .await
            .expect("update should succeed");
    }

    #[tokio::test]
    async fn submit_review_posts_fields_to_action_endpoint() {
        let server = MockServer::start().await;
        let gateway = gateway_for(&server);

        Mock::given(method("POST"))
            .and(path("/kapis/openpitrix.io/v1/apps/app-1/versions/appv-9/action"))
            .and(body_json(json!({ "action": "pass", "message": "looks good" })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let submission = ReviewSubmission::for_action(
            AppId::new("app-1").expect("valid app id"),
            VersionId::new("appv-9").expect("valid version id"),
            ReviewAction::Pass,
            Some("looks good"),
        );
        gateway
            .submit_review(&submission)
            .await
            .expect("review should succeed");
    }

    #[tokio::test]
    async fn submit_review_surfaces_not_found() {
        let server = MockServer::start().await;
        let gateway = gateway_for(&server);

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(404).set_body_string("version not found"))
            .mount(&server)
            .await;

        let submission = ReviewSubmission::for_action(
            AppId::new("app-1").expect("valid app id"),
            VersionId::new("missing").expect("valid version id"),
            ReviewAction::Submit,
            None,
        );
        let error = gateway
            .submit_review(&submission)
            .await
            .expect_err("review should fail");

        assert_eq!(
            error,
            ConsoleError::NotFound {
                message: "submit review: version not found".to_owned(),
            }
        );
    }
}
