//! Test helpers for constructing `RepoRecord` fixtures and list payloads.
//!
//! # Examples
//!
//! ```
//! use apprepo::console::models::test_support::repo_record;
//!
//! let record = repo_record("repo-1", "Bitnami");
//! assert_eq!(record.display_name(), "Bitnami");
//! assert_eq!(record.workspace.as_str(), "demo");
//! ```

use serde_json::{Value, json};

use super::{RepoRecord, RepoStatus};
use crate::console::locator::{RepoId, WorkspaceName};

/// Workspace used by fixtures.
pub const FIXTURE_WORKSPACE: &str = "demo";

/// Constructs a record in the fixture workspace with the given id and
/// display name.
///
/// # Panics
///
/// Panics when `id` is not a valid repository identifier.
#[must_use]
pub fn repo_record(id: &str, name: &str) -> RepoRecord {
    RepoRecord {
        id: RepoId::new(id).unwrap_or_else(|error| panic!("invalid fixture id {id}: {error}")),
        uid: Some(format!("uid-{id}")),
        name: Some(name.to_owned()),
        url: format!("https://charts.example.com/{id}"),
        description: None,
        status: RepoStatus::Successful,
        created_at: None,
        workspace: WorkspaceName::new(FIXTURE_WORKSPACE)
            .unwrap_or_else(|error| panic!("invalid fixture workspace: {error}")),
    }
}

/// Wire representation of a repository, as the list endpoint returns it.
#[must_use]
pub fn repo_json(id: &str, name: &str, state: &str) -> Value {
    json!({
        "metadata": {
            "name": id,
            "uid": format!("uid-{id}"),
            "creationTimestamp": "2024-03-01T10:00:00Z",
            "labels": { "kubesphere.io/workspace": FIXTURE_WORKSPACE }
        },
        "spec": {
            "name": name,
            "url": format!("https://charts.example.com/{id}")
        },
        "status": { "state": state }
    })
}

/// List endpoint payload with `count` generated repositories and the given
/// total.
#[must_use]
pub fn repo_list_json(count: usize, total_count: u64) -> Value {
    let items: Vec<Value> = (1..=count)
        .map(|index| repo_json(&format!("repo-{index}"), &format!("Repo {index}"), "successful"))
        .collect();
    json!({ "items": items, "total_count": total_count })
}
