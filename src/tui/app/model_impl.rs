//! `Model` trait implementation for the repository screen.
//!
//! This module contains the `bubbletea_rs::Model` implementation for
//! `RepoManagerApp`, handling initialisation, update dispatch, and view
//! rendering.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};

use super::RepoManagerApp;
use crate::tui::components::pad_or_clip;
use crate::tui::input::{InputContext, map_key_to_message_with_context};
use crate::tui::messages::AppMsg;
use crate::tui::state::ModalKind;

impl Model for RepoManagerApp {
    fn init() -> (Self, Option<Cmd>) {
        let mut model = Self::new(crate::tui::screen_context());
        let cmd = model.request_page();
        (model, cmd)
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        // Any key closes the help overlay.
        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            if self.show_help {
                return self.handle_message(&AppMsg::ToggleHelp);
            }
            let mapped = map_key_to_message_with_context(key_msg, self.input_context())?;
            return self.handle_message(&mapped);
        }

        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        if self.show_help {
            return self.normalise_viewport(&Self::render_help_overlay());
        }
        self.normalise_viewport(&self.render_screen())
    }
}

impl RepoManagerApp {
    /// Returns what currently receives key presses.
    pub(crate) fn input_context(&self) -> InputContext {
        match self.modal.kind() {
            ModalKind::Create | ModalKind::Edit => InputContext::Form,
            ModalKind::Delete => InputContext::Confirm,
            ModalKind::None => {
                if self.list.search_input().is_some() {
                    InputContext::Search
                } else {
                    InputContext::List
                }
            }
        }
    }

    /// Fits the frame to the terminal.
    ///
    /// Every row is padded or clipped to one column less than the width so the
    /// terminal never autowraps, and stale cells from the previous frame are
    /// overwritten. Missing rows are filled with blanks.
    fn normalise_viewport(&self, output: &str) -> String {
        let row_width = usize::from(self.width).saturating_sub(1).max(1);
        let rows = usize::from(self.height.max(1));

        let blank = " ".repeat(row_width);
        let mut frame = String::new();
        for line in output
            .lines()
            .map(|line| pad_or_clip(line, row_width))
            .chain(std::iter::repeat_with(|| blank.clone()))
            .take(rows)
        {
            frame.push_str(&line);
            frame.push('\n');
        }
        frame
    }
}
