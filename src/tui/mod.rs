//! Terminal user interface for managing a workspace's app repositories.
//!
//! The screen follows the Model-View-Update pattern of bubbletea-rs:
//!
//! - **Model**: [`app::RepoManagerApp`] owns the table, modal, and form state
//! - **View**: components render from per-frame view contexts
//! - **Update**: messages from keys and finished requests drive transitions
//!
//! # Screen context
//!
//! bubbletea-rs constructs the model through the static `Model::init`, so the
//! gateway, workspace, page size, and localizer are stored in a module-level
//! [`OnceLock`]. Call [`set_screen_context`] before starting the program.

use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::console::gateway::RepoGateway;
use crate::console::locator::WorkspaceName;

pub mod actions;
pub mod app;
pub mod components;
pub mod i18n;
pub mod input;
pub mod messages;
pub mod state;

pub use app::RepoManagerApp;

use i18n::Localizer;

/// Everything the screen needs to talk to the console.
#[derive(Clone)]
pub struct ScreenContext {
    /// Gateway used for list, delete, create, and edit requests.
    pub gateway: Arc<dyn RepoGateway>,
    /// Workspace the screen is scoped to.
    pub workspace: WorkspaceName,
    /// Rows per page.
    pub limit: u32,
    /// Text lookup for everything shown on screen.
    pub localizer: Arc<dyn Localizer>,
}

impl fmt::Debug for ScreenContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScreenContext")
            .field("workspace", &self.workspace)
            .field("limit", &self.limit)
            .finish_non_exhaustive()
    }
}

static SCREEN_CONTEXT: OnceLock<ScreenContext> = OnceLock::new();

/// Stores the screen context read by `RepoManagerApp::init()`.
///
/// Returns `false` if a context was already set.
#[must_use]
pub fn set_screen_context(context: ScreenContext) -> bool {
    SCREEN_CONTEXT.set(context).is_ok()
}

pub(crate) fn screen_context() -> Option<ScreenContext> {
    SCREEN_CONTEXT.get().cloned()
}
