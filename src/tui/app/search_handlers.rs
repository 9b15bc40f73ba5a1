//! Keyword search handlers.
//!
//! Typing only edits the search box; the list is refetched from the first
//! page when the keyword is submitted or cleared.

use bubbletea_rs::Cmd;

use super::RepoManagerApp;
use crate::tui::messages::AppMsg;

impl RepoManagerApp {
    /// Dispatches search messages to their handlers.
    pub(super) fn handle_search_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::StartSearch => {
                self.list.begin_search();
                None
            }
            AppMsg::SearchInput(ch) => {
                self.list.push_search_char(*ch);
                None
            }
            AppMsg::SearchBackspace => {
                self.list.pop_search_char();
                None
            }
            AppMsg::SubmitSearch => {
                self.list.submit_search();
                self.request_page()
            }
            AppMsg::CancelSearch => {
                self.list.cancel_search();
                None
            }
            AppMsg::ClearKeyword => {
                if !self.list.clear_keyword() {
                    return None;
                }
                self.request_page()
            }
            _ => {
                // Unreachable: caller filters to search messages.
                None
            }
        }
    }
}
