//! Application version review operation.

use std::io::{self, Write};
use std::time::Duration;

use apprepo::{
    AccessToken, AppId, AppRepoConfig, ConsoleError, ConsoleLocator, HttpConsoleGateway,
    ReviewGateway, ReviewSubmission, VersionId, handle_review,
};

use super::Connection;
use super::output::write_review_summary;

/// Posts the configured review action for `app_id` / `version_id`.
///
/// # Errors
///
/// Returns a configuration error for a missing identifier or unknown review
/// verb, and the gateway's error if the request fails.
pub async fn run(config: &AppRepoConfig) -> Result<(), ConsoleError> {
    let mut stdout = io::stdout().lock();
    run_with_gateway_builder(config, HttpConsoleGateway::for_token, &mut stdout).await
}

/// Submits the review using a custom gateway builder.
///
/// This function is exposed for testing with mock gateways.
pub async fn run_with_gateway_builder<G, F, W>(
    config: &AppRepoConfig,
    build_gateway: F,
    writer: &mut W,
) -> Result<(), ConsoleError>
where
    G: ReviewGateway,
    F: FnOnce(&AccessToken, &ConsoleLocator, Duration) -> Result<G, ConsoleError>,
    W: Write,
{
    let submission = submission_from(config)?;
    let connection = Connection::from_config(config)?;

    let gateway = build_gateway(&connection.token, &connection.locator, config.timeout())?;
    handle_review(&gateway, &submission).await?;

    write_review_summary(writer, &submission)
}

fn submission_from(config: &AppRepoConfig) -> Result<ReviewSubmission, ConsoleError> {
    let missing = |field: &str| ConsoleError::Configuration {
        message: format!("{field} is required to submit a review"),
    };
    let app_id = AppId::new(config.app_id.as_deref().ok_or_else(|| missing("app_id"))?)?;
    let version_id = VersionId::new(
        config
            .version_id
            .as_deref()
            .ok_or_else(|| missing("version_id"))?,
    )?;
    Ok(ReviewSubmission::for_action(
        app_id,
        version_id,
        config.review_action()?,
        config.review_message.as_deref(),
    ))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use apprepo::{AppRepoConfig, ConsoleError};
    use serde_json::json;

    use super::run_with_gateway_builder;
    use crate::cli::test_utils::{CapturingGateway, listing_config};

    fn review_config(action: Option<&str>) -> AppRepoConfig {
        AppRepoConfig {
            app_id: Some("app-1".to_owned()),
            version_id: Some("appv-9".to_owned()),
            review_action: action.map(str::to_owned),
            review_message: Some("looks good".to_owned()),
            ..listing_config()
        }
    }

    #[tokio::test]
    async fn posts_action_and_message_for_version() {
        let gateway = CapturingGateway::default();
        let reviews = Arc::clone(&gateway.reviews);

        let mut buffer = Vec::new();
        run_with_gateway_builder(
            &review_config(Some("pass")),
            |_, _, _| Ok(gateway),
            &mut buffer,
        )
        .await
        .expect("review should succeed");

        let submitted = reviews.lock().expect("captured mutex should be available");
        let submission = submitted.first().expect("review should be submitted");
        assert_eq!(submission.app_id.as_str(), "app-1");
        assert_eq!(submission.version_id.as_str(), "appv-9");
        assert_eq!(
            serde_json::Value::Object(submission.data.clone()),
            json!({ "action": "pass", "message": "looks good" })
        );

        let output = String::from_utf8(buffer).expect("output should be valid UTF-8");
        assert_eq!(output, "Submitted pass for app app-1 version appv-9\n");
    }

    #[tokio::test]
    async fn workspace_is_not_required() {
        let config = AppRepoConfig {
            workspace: None,
            ..review_config(None)
        };
        let gateway = CapturingGateway::default();

        let mut buffer = Vec::new();
        run_with_gateway_builder(&config, |_, _, _| Ok(gateway), &mut buffer)
            .await
            .expect("review should succeed without a workspace");

        let output = String::from_utf8(buffer).expect("output should be valid UTF-8");
        assert!(output.starts_with("Submitted submit"), "output: {output}");
    }

    #[tokio::test]
    async fn unknown_action_is_rejected() {
        let gateway = CapturingGateway::default();
        let reviews = Arc::clone(&gateway.reviews);

        let mut buffer = Vec::new();
        let result = run_with_gateway_builder(
            &review_config(Some("approve-everything")),
            |_, _, _| Ok(gateway),
            &mut buffer,
        )
        .await;

        assert!(matches!(result, Err(ConsoleError::Validation { .. })));
        assert!(reviews.lock().expect("captured mutex").is_empty());
    }
}
