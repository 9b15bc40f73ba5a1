//! Action dispatch, delete confirmation, and management form handlers.
//!
//! Every action from the declarative action table enters the screen through
//! [`RepoManagerApp::dispatch_action`]. Opening a modal replaces any other;
//! closing one always clears its selection.

use bubbletea_rs::Cmd;

use super::RepoManagerApp;
use crate::tui::actions::ActionKind;
use crate::tui::messages::AppMsg;
use crate::tui::state::{FormState, ModalKind};

impl RepoManagerApp {
    /// Dispatches action, modal, and form messages to their handlers.
    pub(super) fn handle_modal_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Action(kind) => {
                self.dispatch_action(*kind);
                None
            }
            AppMsg::CloseModal => {
                self.close_modal();
                None
            }
            AppMsg::ConfirmDelete => self.handle_confirm_delete(),
            AppMsg::FormInput(ch) => {
                if self.form_accepts_input() {
                    self.form.push_char(*ch);
                }
                None
            }
            AppMsg::FormBackspace => {
                if self.form_accepts_input() {
                    self.form.backspace();
                }
                None
            }
            AppMsg::FormNextField => {
                if self.form_accepts_input() {
                    self.form.focus_next();
                }
                None
            }
            AppMsg::SubmitForm => self.handle_submit_form(),
            _ => {
                // Unreachable: caller filters to modal messages.
                None
            }
        }
    }

    /// Performs the screen transition for `kind`.
    ///
    /// Item actions use the record under the cursor and the batch action
    /// uses the checked rows. Actions without a target, or issued while a
    /// request is in flight, do nothing.
    pub fn dispatch_action(&mut self, kind: ActionKind) {
        if self.modal.is_pending() {
            return;
        }
        match kind {
            ActionKind::Create => {
                self.form = FormState::for_create();
                self.modal.open(ModalKind::Create, Vec::new());
            }
            ActionKind::Edit => {
                let Some(record) = self.list.selected_record().cloned() else {
                    return;
                };
                self.form = FormState::for_edit(&record);
                self.modal.open(ModalKind::Edit, vec![record]);
            }
            ActionKind::Delete => {
                let Some(record) = self.list.selected_record().cloned() else {
                    return;
                };
                self.modal.open(ModalKind::Delete, vec![record]);
            }
            ActionKind::BatchDelete => {
                let checked = self.list.checked_records();
                if checked.is_empty() {
                    return;
                }
                self.modal.open(ModalKind::Delete, checked);
            }
        }
        tracing::debug!(modal = ?self.modal.kind(), "modal opened");
    }

    /// Closes the modal unless its request is still in flight.
    fn close_modal(&mut self) {
        if self.modal.is_pending() {
            return;
        }
        self.modal.close();
        self.form = FormState::default();
    }

    const fn form_accepts_input(&self) -> bool {
        matches!(self.modal.kind(), ModalKind::Create | ModalKind::Edit) && !self.modal.is_pending()
    }

    fn handle_confirm_delete(&mut self) -> Option<Cmd> {
        if self.modal.kind() != ModalKind::Delete || !self.modal.begin_request() {
            return None;
        }
        let selection = self.modal.selection().to_vec();
        tracing::debug!(count = selection.len(), "delete confirmed");
        Some(self.delete_cmd(selection))
    }

    fn handle_submit_form(&mut self) -> Option<Cmd> {
        if !self.form_accepts_input() {
            return None;
        }
        let draft = self.form.draft().ok()?;
        let existing = if self.modal.kind() == ModalKind::Edit {
            self.modal.selection().first().cloned()
        } else {
            None
        };
        if !self.modal.begin_request() {
            return None;
        }
        Some(self.save_cmd(existing, draft))
    }
}
