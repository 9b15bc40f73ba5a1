//! Review submission for application versions.
//!
//! A review is a pass-through: the application and version identifiers select
//! the action endpoint and every other field is posted unchanged.

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use super::error::ConsoleError;
use super::gateway::ReviewGateway;
use super::locator::{AppId, VersionId};

/// Review verbs accepted by the action endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewAction {
    /// Submit the version for review.
    #[default]
    Submit,
    /// Withdraw a pending submission.
    Cancel,
    /// Approve the version.
    Pass,
    /// Reject the version.
    Reject,
    /// Suspend a released version.
    Suspend,
    /// Recover a suspended version.
    Recover,
}

impl ReviewAction {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Submit => "submit",
            Self::Cancel => "cancel",
            Self::Pass => "pass",
            Self::Reject => "reject",
            Self::Suspend => "suspend",
            Self::Recover => "recover",
        }
    }
}

impl fmt::Display for ReviewAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReviewAction {
    type Err = ConsoleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "submit" => Ok(Self::Submit),
            "cancel" => Ok(Self::Cancel),
            "pass" => Ok(Self::Pass),
            "reject" => Ok(Self::Reject),
            "suspend" => Ok(Self::Suspend),
            "recover" => Ok(Self::Recover),
            other => Err(ConsoleError::Validation {
                message: format!(
                    "unknown review action `{other}` (expected submit, cancel, pass, reject, suspend, or recover)"
                ),
            }),
        }
    }
}

/// A review to post against an application version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSubmission {
    /// Target application.
    pub app_id: AppId,
    /// Target version.
    pub version_id: VersionId,
    /// Review fields posted as the request body.
    pub data: Map<String, Value>,
}

impl ReviewSubmission {
    /// Creates a submission with an arbitrary body.
    #[must_use]
    pub const fn new(app_id: AppId, version_id: VersionId, data: Map<String, Value>) -> Self {
        Self {
            app_id,
            version_id,
            data,
        }
    }

    /// Creates a submission carrying `action` and, when given, `message`.
    #[must_use]
    pub fn for_action(
        app_id: AppId,
        version_id: VersionId,
        action: ReviewAction,
        message: Option<&str>,
    ) -> Self {
        let mut data = Map::new();
        data.insert("action".to_owned(), Value::from(action.as_str()));
        if let Some(text) = message.filter(|text| !text.trim().is_empty()) {
            data.insert("message".to_owned(), Value::from(text));
        }
        Self::new(app_id, version_id, data)
    }

    /// Splits a flat object into identifiers and the remaining review fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Validation`] when the payload is not an object
    /// or lacks string `app_id` / `version_id` fields, and
    /// [`ConsoleError::InvalidIdentifier`] when either identifier is unusable.
    ///
    /// # Example
    ///
    /// ```
    /// use apprepo::console::review::ReviewSubmission;
    /// use serde_json::json;
    ///
    /// let submission = ReviewSubmission::from_payload(json!({
    ///     "app_id": "app-1",
    ///     "version_id": "appv-1",
    ///     "action": "pass",
    /// }))
    /// .expect("payload should split");
    /// assert_eq!(submission.app_id.as_str(), "app-1");
    /// assert_eq!(submission.data.len(), 1);
    /// ```
    pub fn from_payload(payload: Value) -> Result<Self, ConsoleError> {
        let Value::Object(mut data) = payload else {
            return Err(ConsoleError::Validation {
                message: "review payload must be a JSON object".to_owned(),
            });
        };

        let app_id = take_identifier(&mut data, "app_id").and_then(AppId::new)?;
        let version_id = take_identifier(&mut data, "version_id").and_then(VersionId::new)?;

        Ok(Self::new(app_id, version_id, data))
    }
}

fn take_identifier(data: &mut Map<String, Value>, field: &str) -> Result<String, ConsoleError> {
    match data.remove(field) {
        Some(Value::String(value)) => Ok(value),
        _ => Err(ConsoleError::Validation {
            message: format!("review payload requires a string `{field}`"),
        }),
    }
}

/// Posts the review through the gateway.
///
/// # Errors
///
/// Propagates gateway failures unchanged.
pub async fn handle_review<G>(
    gateway: &G,
    submission: &ReviewSubmission,
) -> Result<(), ConsoleError>
where
    G: ReviewGateway + ?Sized,
{
    tracing::info!(
        app_id = submission.app_id.as_str(),
        version_id = submission.version_id.as_str(),
        "submitting review"
    );
    gateway.submit_review(submission).await
}
