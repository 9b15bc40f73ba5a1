//! Support modules for the repository management BDD tests.

pub(crate) mod domain;
#[path = "../support/runtime.rs"]
pub(crate) mod runtime;
pub(crate) mod state;

pub(crate) use domain::{RepoCount, StatusCode};
pub(crate) use state::{
    ManagementState, StepResult, deletion_bodies, dispatch, ensure_console, listed_conditions,
    mount, screen_for,
};
