//! Main TUI application model implementing the MVU pattern.
//!
//! The model owns the table, the single modal, and the management form.
//! Requests run as bubbletea-rs commands whose results come back as
//! [`AppMsg`] values.
//!
//! # Module Structure
//!
//! - `navigation`: cursor, check marks, and paging
//! - `search_handlers`: keyword entry
//! - `modal_handlers`: the action dispatcher, delete confirmation, and form
//! - `data_handlers`: request commands and their results
//! - `model_impl`: the `bubbletea_rs::Model` implementation
//! - `rendering`: frame rendering

use std::fmt;
use std::sync::Arc;

use bubbletea_rs::Cmd;

use crate::console::models::RepoRecord;
use crate::console::query::ListParameters;

use super::ScreenContext;
use super::i18n::{Localizer, MessageCatalog};
use super::messages::AppMsg;
use super::state::{FormState, ListState, ModalState};

mod data_handlers;
mod model_impl;
mod modal_handlers;
mod navigation;
mod rendering;
mod search_handlers;


/// Main application model for the repository screen.
pub struct RepoManagerApp {
    pub(crate) list: ListState,
    pub(crate) modal: ModalState,
    pub(crate) form: FormState,
    parameters: ListParameters,
    context: Option<ScreenContext>,
    localizer: Arc<dyn Localizer>,
    pub(crate) loading: bool,
    pub(crate) error: Option<String>,
    notice: Option<String>,
    list_generation: u64,
    pub(crate) show_help: bool,
    width: u16,
    height: u16,
}

impl fmt::Debug for RepoManagerApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RepoManagerApp")
            .field("list", &self.list)
            .field("modal", &self.modal)
            .field("form", &self.form)
            .field("loading", &self.loading)
            .field("error", &self.error)
            .field("notice", &self.notice)
            .field("list_generation", &self.list_generation)
            .finish_non_exhaustive()
    }
}

impl RepoManagerApp {
    /// Creates a screen bound to `context`.
    ///
    /// Without a context the screen still renders, but every request fails
    /// with a configuration message.
    #[must_use]
    pub fn new(context: Option<ScreenContext>) -> Self {
        let localizer = context.as_ref().map_or_else(
            || Arc::new(MessageCatalog::english()) as Arc<dyn Localizer>,
            |ctx| Arc::clone(&ctx.localizer),
        );
        Self {
            list: ListState::default(),
            modal: ModalState::default(),
            form: FormState::default(),
            parameters: ListParameters::repositories(),
            context,
            localizer,
            loading: false,
            error: None,
            notice: None,
            list_generation: 0,
            show_help: false,
            width: 80,
            height: 24,
        }
    }

    /// Creates a screen bound to `context`.
    #[must_use]
    pub fn with_context(context: ScreenContext) -> Self {
        Self::new(Some(context))
    }

    /// Table state.
    #[must_use]
    pub const fn list(&self) -> &ListState {
        &self.list
    }

    /// Modal state.
    #[must_use]
    pub const fn modal(&self) -> &ModalState {
        &self.modal
    }

    /// Management form state.
    #[must_use]
    pub const fn form(&self) -> &FormState {
        &self.form
    }

    /// Success notice shown until the operator's next input.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Error shown on the status line.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a page request is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Record under the cursor.
    #[must_use]
    pub fn selected_record(&self) -> Option<&RepoRecord> {
        self.list.selected_record()
    }

    /// Handles a message and updates state accordingly.
    ///
    /// While a modal is open, navigation and search messages are ignored so
    /// the table cannot change underneath it. Any operator input dismisses
    /// the success notice.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_user_input() {
            self.notice = None;
        }
        if self.modal.is_open() && (msg.is_navigation() || msg.is_search()) {
            return None;
        }
        if msg.is_navigation() {
            return self.handle_navigation_msg(msg);
        }
        if msg.is_search() {
            return self.handle_search_msg(msg);
        }
        if msg.is_modal() {
            return self.handle_modal_msg(msg);
        }
        if msg.is_data() {
            return self.handle_data_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }

    /// Dispatches lifecycle and window messages to their handlers.
    fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::WindowResized { width, height } => {
                self.width = *width;
                self.height = *height;
                None
            }
            _ => {
                // Unreachable: caller filters to lifecycle messages.
                None
            }
        }
    }

    fn localizer(&self) -> &dyn Localizer {
        self.localizer.as_ref()
    }
}
