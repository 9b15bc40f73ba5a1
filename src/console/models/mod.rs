//! Data models for app repositories.
//!
//! Types prefixed with `Api` are internal deserialisation targets describing
//! the console's wire format; they convert into the public domain types and
//! reject payloads that are missing required fields.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use super::error::ConsoleError;
use super::locator::{RepoId, WorkspaceName};
use super::pagination::PageInfo;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Synchronisation status of a repository, as reported by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RepoStatus {
    /// The server is indexing the repository. Assumed when no status is
    /// reported.
    #[default]
    Syncing,
    /// The last synchronisation succeeded.
    Successful,
    /// The last synchronisation failed.
    Failed,
    /// The repository is active.
    Active,
    /// A state this client does not recognise.
    Other(String),
}

impl RepoStatus {
    /// Parses a wire value; blank values map to [`RepoStatus::Syncing`].
    #[must_use]
    pub fn from_wire(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "syncing" => Self::Syncing,
            "successful" => Self::Successful,
            "failed" => Self::Failed,
            "active" => Self::Active,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Returns the wire value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Syncing => "syncing",
            Self::Successful => "successful",
            Self::Failed => "failed",
            Self::Active => "active",
            Self::Other(value) => value.as_str(),
        }
    }

    /// Message key of the localised status label.
    #[must_use]
    pub fn label_key(&self) -> String {
        format!("APP_REPO_STATUS_{}", self.as_str().to_ascii_uppercase())
    }
}

impl fmt::Display for RepoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered application repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRecord {
    /// Unique identifier (`metadata.name`).
    pub id: RepoId,
    /// Server-assigned uid, used as the table row key when present.
    pub uid: Option<String>,
    /// Human-readable name (`spec.name`).
    pub name: Option<String>,
    /// Source URL of the repository.
    pub url: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Synchronisation status.
    pub status: RepoStatus,
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
    /// Workspace the repository belongs to.
    pub workspace: WorkspaceName,
}

impl RepoRecord {
    /// Name shown to users: the display name, or the identifier when the
    /// display name is missing or blank.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| self.id.as_str())
    }

    /// Stable key identifying this record's table row.
    #[must_use]
    pub fn row_key(&self) -> &str {
        self.uid.as_deref().unwrap_or_else(|| self.id.as_str())
    }
}

/// One page of repositories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoPage {
    /// Repositories on this page.
    pub items: Vec<RepoRecord>,
    /// Total number of matching repositories (the server's `total_count`).
    pub total_items: u64,
    /// Pagination state.
    pub page_info: PageInfo,
}

impl RepoPage {
    /// An empty first page.
    #[must_use]
    pub fn empty(limit: u32) -> Self {
        Self {
            items: Vec::new(),
            total_items: 0,
            page_info: PageInfo::new(1, limit, 0),
        }
    }
}

/// Payload for creating or editing a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoDraft {
    /// Display name.
    pub name: String,
    /// Source URL.
    pub url: String,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RepoDraft {
    /// Builds a validated draft. Blank descriptions are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Validation`] when the name is blank or the URL
    /// is not absolute.
    pub fn new(name: &str, url: &str, description: Option<&str>) -> Result<Self, ConsoleError> {
        let trimmed_name = name.trim();
        if trimmed_name.is_empty() {
            return Err(ConsoleError::Validation {
                message: "repository name is required".to_owned(),
            });
        }

        let trimmed_url = url.trim();
        Url::parse(trimmed_url).map_err(|error| ConsoleError::Validation {
            message: format!("repository URL is invalid: {error}"),
        })?;

        Ok(Self {
            name: trimmed_name.to_owned(),
            url: trimmed_url.to_owned(),
            description: description
                .map(str::trim)
                .filter(|text| !text.is_empty())
                .map(ToOwned::to_owned),
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiRepoList {
    #[serde(default)]
    pub(crate) items: Option<Vec<ApiRepo>>,
    pub(crate) total_count: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiRepo {
    pub(crate) metadata: ApiObjectMeta,
    #[serde(default)]
    pub(crate) spec: ApiRepoSpec,
    #[serde(default)]
    pub(crate) status: Option<ApiRepoStatus>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiObjectMeta {
    pub(crate) name: String,
    pub(crate) uid: Option<String>,
    pub(crate) creation_timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ApiRepoSpec {
    pub(crate) name: Option<String>,
    pub(crate) url: Option<String>,
    pub(crate) description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiRepoStatus {
    pub(crate) state: Option<String>,
}

impl ApiRepo {
    pub(crate) fn into_record(self, workspace: &WorkspaceName) -> Result<RepoRecord, ConsoleError> {
        let id = RepoId::new(&self.metadata.name).map_err(|_| ConsoleError::MalformedResponse {
            message: format!(
                "repository has an unusable metadata.name {:?}",
                self.metadata.name
            ),
        })?;
        let status = self
            .status
            .and_then(|status| status.state)
            .map(|state| RepoStatus::from_wire(&state))
            .unwrap_or_default();

        Ok(RepoRecord {
            id,
            uid: self.metadata.uid,
            name: self.spec.name,
            url: self.spec.url.unwrap_or_default(),
            description: self.spec.description,
            status,
            created_at: self.metadata.creation_timestamp,
            workspace: workspace.clone(),
        })
    }
}

impl ApiRepoList {
    pub(crate) fn into_page(
        self,
        workspace: &WorkspaceName,
        page: u32,
        limit: u32,
    ) -> Result<RepoPage, ConsoleError> {
        let items = self
            .items
            .unwrap_or_default()
            .into_iter()
            .map(|repo| repo.into_record(workspace))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RepoPage {
            items,
            total_items: self.total_count,
            page_info: PageInfo::new(page, limit, self.total_count),
        })
    }
}
