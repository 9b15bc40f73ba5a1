//! UI components for the repository screen.
//!
//! Each component is stateless; it renders from a view context built by the
//! application model for the current frame.

mod banner;
mod delete_confirm;
mod manage_form;
mod repo_table;
mod text_fit;

pub use banner::render_banner;
pub use delete_confirm::{DeleteConfirmComponent, DeleteConfirmViewContext};
pub use manage_form::{ManageFormComponent, ManageFormViewContext};
pub use repo_table::{RepoTableComponent, RepoTableViewContext};
pub(crate) use text_fit::pad_or_clip;
