//! Client for the console's app-store repository and review endpoints.
//!
//! This module parses server locations, validates identifiers and tokens,
//! formats list queries from table state, and wraps `reqwest` behind gateway
//! traits. Responses are parsed into explicit schemas and failures are mapped
//! into [`ConsoleError`] variants that the CLI and screen can show directly.

pub mod error;
pub mod gateway;
pub mod intake;
pub mod locator;
pub mod models;
pub mod pagination;
pub mod query;
pub mod review;

pub use error::ConsoleError;
pub use gateway::{HttpConsoleGateway, RepoGateway, ReviewGateway};
pub use intake::RepoIntake;
pub use locator::{AccessToken, AppId, ConsoleLocator, RepoId, VersionId, WorkspaceName};
pub use models::{RepoDraft, RepoPage, RepoRecord, RepoStatus};
pub use pagination::PageInfo;
pub use query::{ListParameters, ListQuery, TableRequest, transform_request_params};
pub use review::{ReviewAction, ReviewSubmission, handle_review};

#[cfg(test)]
pub use gateway::{MockRepoGateway, MockReviewGateway};
