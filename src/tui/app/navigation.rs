//! Cursor, check mark, and paging handlers.

use bubbletea_rs::Cmd;

use super::RepoManagerApp;
use crate::tui::messages::AppMsg;

impl RepoManagerApp {
    /// Dispatches navigation messages to their handlers.
    pub(super) fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::CursorUp => {
                self.list.cursor_up();
                None
            }
            AppMsg::CursorDown => {
                self.list.cursor_down();
                None
            }
            AppMsg::ToggleCheck => {
                self.list.toggle_check();
                None
            }
            AppMsg::NextPage => self.handle_next_page(),
            AppMsg::PrevPage => self.handle_prev_page(),
            _ => {
                // Unreachable: caller filters to navigation messages.
                None
            }
        }
    }

    fn handle_next_page(&mut self) -> Option<Cmd> {
        if !self.list.next_page() {
            return None;
        }
        self.request_page()
    }

    fn handle_prev_page(&mut self) -> Option<Cmd> {
        if !self.list.prev_page() {
            return None;
        }
        self.request_page()
    }
}
