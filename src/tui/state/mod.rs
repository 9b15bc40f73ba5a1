//! State management for the repository screen.
//!
//! This module provides the table state (rows, cursor, checked rows, search),
//! the modal state machine, and the management form.

mod form;
mod list;
mod modal;

pub use form::{FormField, FormState};
pub use list::ListState;
pub use modal::{ModalKind, ModalState};
