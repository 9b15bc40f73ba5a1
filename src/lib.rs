//! apprepo library crate for managing a console workspace's app
//! repositories.
//!
//! The library parses console locations, formats repository list queries
//! from table state, wraps the console's REST endpoints behind gateway
//! traits, submits application version reviews, and provides an
//! interactive repository management screen built on bubbletea-rs.

pub mod config;
pub mod console;
pub mod tui;

pub use config::{AppRepoConfig, OperationMode};
pub use console::{
    AccessToken, AppId, ConsoleError, ConsoleLocator, HttpConsoleGateway, ListParameters,
    ListQuery, PageInfo, RepoDraft, RepoGateway, RepoId, RepoIntake, RepoPage, RepoRecord,
    RepoStatus, ReviewAction, ReviewGateway, ReviewSubmission, TableRequest, VersionId,
    WorkspaceName, handle_review, transform_request_params,
};
