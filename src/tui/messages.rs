//! Message types for the TUI update loop.
//!
//! This module defines all message types that can be sent to the application's
//! update function. Messages represent user actions, async command results,
//! and system events.

use crate::console::error::ConsoleError;
use crate::console::models::RepoPage;

use super::actions::ActionKind;

/// Messages for the repository manager TUI application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Navigation
    /// Move cursor up one row.
    CursorUp,
    /// Move cursor down one row.
    CursorDown,
    /// Load the next page.
    NextPage,
    /// Load the previous page.
    PrevPage,
    /// Toggle the check mark on the cursor row.
    ToggleCheck,

    // Search
    /// Enter search mode.
    StartSearch,
    /// Type a character into the search box.
    SearchInput(char),
    /// Delete the last search character.
    SearchBackspace,
    /// Apply the typed keyword.
    SubmitSearch,
    /// Leave search mode without applying.
    CancelSearch,
    /// Remove the applied keyword.
    ClearKeyword,

    // Actions and modals
    /// Run a declared action.
    Action(ActionKind),
    /// Close the open modal without changes.
    CloseModal,
    /// Confirm deletion of the modal's selection.
    ConfirmDelete,
    /// Type a character into the focused form field.
    FormInput(char),
    /// Delete the last character of the focused form field.
    FormBackspace,
    /// Focus the next form field.
    FormNextField,
    /// Validate and save the form.
    SubmitForm,

    // Data loading
    /// Request the current page again.
    RefreshRequested,
    /// A page was loaded.
    PageLoaded {
        /// Request generation the page answers.
        generation: u64,
        /// The loaded page.
        page: RepoPage,
    },
    /// Loading a page failed.
    LoadFailed {
        /// Request generation the failure answers.
        generation: u64,
        /// Error shown on the status line.
        message: String,
    },
    /// The delete request succeeded.
    DeleteSucceeded,
    /// The delete request failed.
    DeleteFailed(String),
    /// The create or edit request succeeded.
    SaveSucceeded,
    /// The create or edit request failed.
    SaveFailed(String),

    // Application lifecycle
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Creates a load failure message from a `ConsoleError`.
    #[must_use]
    pub fn from_error(generation: u64, error: &ConsoleError) -> Self {
        Self::LoadFailed {
            generation,
            message: error.to_string(),
        }
    }

    /// Returns true for messages typed by the operator, as opposed to
    /// request results and window events.
    #[must_use]
    pub const fn is_user_input(&self) -> bool {
        self.is_navigation()
            || self.is_search()
            || self.is_modal()
            || matches!(self, Self::RefreshRequested | Self::ToggleHelp)
    }

    /// Returns true for cursor, paging, and check messages.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::CursorUp | Self::CursorDown | Self::NextPage | Self::PrevPage | Self::ToggleCheck
        )
    }

    /// Returns true for search box messages.
    #[must_use]
    pub const fn is_search(&self) -> bool {
        matches!(
            self,
            Self::StartSearch
                | Self::SearchInput(_)
                | Self::SearchBackspace
                | Self::SubmitSearch
                | Self::CancelSearch
                | Self::ClearKeyword
        )
    }

    /// Returns true for action, modal, and form messages.
    #[must_use]
    pub const fn is_modal(&self) -> bool {
        matches!(
            self,
            Self::Action(_)
                | Self::CloseModal
                | Self::ConfirmDelete
                | Self::FormInput(_)
                | Self::FormBackspace
                | Self::FormNextField
                | Self::SubmitForm
        )
    }

    /// Returns true for request and response messages.
    #[must_use]
    pub const fn is_data(&self) -> bool {
        matches!(
            self,
            Self::RefreshRequested
                | Self::PageLoaded { .. }
                | Self::LoadFailed { .. }
                | Self::DeleteSucceeded
                | Self::DeleteFailed(_)
                | Self::SaveSucceeded
                | Self::SaveFailed(_)
        )
    }
}
