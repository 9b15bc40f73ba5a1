//! Request commands and result handlers.
//!
//! List, delete, and save requests run as bubbletea-rs commands against the
//! gateway in the screen context. Each command resolves to exactly one
//! result message. List requests carry a generation number and only the
//! answer to the latest one is applied.

use std::any::Any;
use std::future::Future;

use bubbletea_rs::Cmd;

use super::RepoManagerApp;
use crate::console::intake::RepoIntake;
use crate::console::models::{RepoDraft, RepoPage, RepoRecord};
use crate::tui::messages::AppMsg;
use crate::tui::state::FormState;

const NO_CONTEXT: &str = "screen context not configured";

/// Wraps a future resolving to a message as a command.
fn message_cmd<F>(future: F) -> Cmd
where
    F: Future<Output = AppMsg> + Send + 'static,
{
    Box::pin(async move { Some(Box::new(future.await) as Box<dyn Any + Send>) })
}

impl RepoManagerApp {
    /// Dispatches data loading and mutation results to their handlers.
    pub(super) fn handle_data_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::RefreshRequested => self.request_page(),
            AppMsg::PageLoaded { generation, page } => {
                if self.is_stale(*generation) {
                    return None;
                }
                self.handle_page_loaded(page)
            }
            AppMsg::LoadFailed {
                generation,
                message,
            } => {
                if self.is_stale(*generation) {
                    return None;
                }
                self.loading = false;
                self.error = Some(message.clone());
                None
            }
            AppMsg::DeleteSucceeded => self.handle_delete_succeeded(),
            AppMsg::DeleteFailed(message) => {
                self.modal.fail(message);
                self.error = Some(message.clone());
                None
            }
            AppMsg::SaveSucceeded => {
                self.modal.close();
                self.form = FormState::default();
                self.request_page()
            }
            AppMsg::SaveFailed(message) => {
                self.modal.fail(message);
                None
            }
            _ => {
                // Unreachable: caller filters to data messages.
                None
            }
        }
    }

    /// Starts loading the current page.
    ///
    /// Previous rows stay on screen until the response arrives.
    #[expect(
        clippy::unnecessary_wraps,
        reason = "Returns Option<Cmd> for consistency with other message handlers"
    )]
    pub(super) fn request_page(&mut self) -> Option<Cmd> {
        self.loading = true;
        self.error = None;
        self.list_generation = self.list_generation.wrapping_add(1);
        let generation = self.list_generation;
        let Some(context) = self.context.clone() else {
            return Some(message_cmd(async move {
                AppMsg::LoadFailed {
                    generation,
                    message: NO_CONTEXT.to_owned(),
                }
            }));
        };
        let request = self.list.table_request(&self.parameters, context.limit);
        Some(message_cmd(async move {
            let intake = RepoIntake::new(context.gateway.as_ref(), context.workspace);
            intake.list(&request).await.map_or_else(
                |error| AppMsg::from_error(generation, &error),
                |page| AppMsg::PageLoaded { generation, page },
            )
        }))
    }

    fn is_stale(&self, generation: u64) -> bool {
        let stale = generation != self.list_generation;
        if stale {
            tracing::debug!(
                generation,
                latest = self.list_generation,
                "dropping superseded list response"
            );
        }
        stale
    }

    pub(super) fn delete_cmd(&self, selection: Vec<RepoRecord>) -> Cmd {
        let Some(context) = self.context.clone() else {
            return message_cmd(async { AppMsg::DeleteFailed(NO_CONTEXT.to_owned()) });
        };
        message_cmd(async move {
            let intake = RepoIntake::new(context.gateway.as_ref(), context.workspace);
            intake.delete(&selection).await.map_or_else(
                |error| AppMsg::DeleteFailed(error.to_string()),
                |()| AppMsg::DeleteSucceeded,
            )
        })
    }

    pub(super) fn save_cmd(&self, existing: Option<RepoRecord>, draft: RepoDraft) -> Cmd {
        let Some(context) = self.context.clone() else {
            return message_cmd(async { AppMsg::SaveFailed(NO_CONTEXT.to_owned()) });
        };
        message_cmd(async move {
            let intake = RepoIntake::new(context.gateway.as_ref(), context.workspace);
            intake.save(existing.as_ref(), &draft).await.map_or_else(
                |error| AppMsg::SaveFailed(error.to_string()),
                |()| AppMsg::SaveSucceeded,
            )
        })
    }

    /// Applies a loaded page. An empty page past the end of a non-empty
    /// result set is replaced by a request for the last page.
    fn handle_page_loaded(&mut self, page: &RepoPage) -> Option<Cmd> {
        self.list.apply_page(page.clone());
        if self.list.clamp_to_last_page() {
            return self.request_page();
        }
        self.loading = false;
        self.error = None;
        None
    }

    /// Shows the success notice, closes the modal, and refetches.
    fn handle_delete_succeeded(&mut self) -> Option<Cmd> {
        let notice = self.localizer().translate("DELETED_SUCCESSFUL");
        tracing::info!(count = self.modal.selection().len(), "repositories deleted");
        self.notice = Some(notice);
        self.modal.close();
        self.list.clear_checked();
        self.request_page()
    }
}
