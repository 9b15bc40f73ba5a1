//! Rendering logic for the repository screen.
//!
//! These are pure query methods that read state without modification.

use super::RepoManagerApp;
use crate::console::models::RepoRecord;
use crate::tui::actions::{ActionScope, render_action_bar};
use crate::tui::components::{
    DeleteConfirmComponent, DeleteConfirmViewContext, ManageFormComponent, ManageFormViewContext,
    RepoTableComponent, RepoTableViewContext, render_banner,
};
use crate::tui::state::ModalKind;

/// Banner (2) + search bar (1) + table header (1) + action bar (1) + status bar (1).
const CHROME_HEIGHT: usize = 6;

impl RepoManagerApp {
    /// Renders the full screen: banner, search bar, body, actions, status.
    pub(super) fn render_screen(&self) -> String {
        let mut output = render_banner(self.localizer(), self.loading);
        output.push_str(&self.render_search_bar());
        output.push_str(&self.render_body());
        output.push_str(&self.render_actions());
        output.push_str(&self.render_status_bar());
        output
    }

    fn render_search_bar(&self) -> String {
        if let Some(input) = self.list.search_input() {
            return format!("/{input}_\n");
        }
        if let Some(keyword) = self.list.keyword() {
            return format!("/{keyword}  (Esc clears)\n");
        }
        format!("/ {}\n", self.localizer().translate("SEARCH_BY_NAME"))
    }

    /// Renders the open modal in place of the table, or the table itself.
    fn render_body(&self) -> String {
        let max_width = usize::from(self.width);
        match self.modal.kind() {
            ModalKind::None => RepoTableComponent::view(&RepoTableViewContext {
                list: &self.list,
                localizer: self.localizer(),
                max_width,
                max_height: usize::from(self.height).saturating_sub(CHROME_HEIGHT),
            }),
            ModalKind::Create | ModalKind::Edit => {
                ManageFormComponent::view(&ManageFormViewContext {
                    visible: true,
                    editing: self.modal.kind() == ModalKind::Edit,
                    form: &self.form,
                    saving: self.modal.is_pending(),
                    request_error: self.modal.error(),
                    localizer: self.localizer(),
                    max_width,
                })
            }
            ModalKind::Delete => {
                let names: Vec<&str> = self
                    .modal
                    .selection()
                    .iter()
                    .map(RepoRecord::display_name)
                    .collect();
                DeleteConfirmComponent::view(&DeleteConfirmViewContext {
                    visible: true,
                    resource_key: "APP_REPOSITORY",
                    names: &names,
                    loading: self.modal.is_pending(),
                    error: self.modal.error(),
                    localizer: self.localizer(),
                })
            }
        }
    }

    /// Renders the action bars that apply to the current state.
    ///
    /// The batch bar replaces the item bar while rows are checked.
    fn render_actions(&self) -> String {
        if self.modal.is_open() {
            return String::new();
        }
        let mut bars = vec![render_action_bar(ActionScope::Table, self.localizer())];
        if self.list.checked_count() > 0 {
            bars.push(render_action_bar(ActionScope::Batch, self.localizer()));
        } else if self.list.selected_record().is_some() {
            bars.push(render_action_bar(ActionScope::Item, self.localizer()));
        }
        format!("{}\n", bars.join("  |  "))
    }

    /// Renders the status line: the last error, else the success notice,
    /// else the page summary.
    pub(super) fn render_status_bar(&self) -> String {
        if let Some(error) = &self.error {
            return format!("Error: {error}\n");
        }
        if let Some(notice) = &self.notice {
            return format!("{notice}  {}\n", self.page_summary());
        }
        format!("{}\n", self.page_summary())
    }

    fn page_summary(&self) -> String {
        let page_info = self.list.page_info();
        let page = self.list.page_index().saturating_add(1).to_string();
        let pages = page_info.total_pages().max(1).to_string();
        let total = page_info.total_items().to_string();
        let checked = self.list.checked_count().to_string();
        self.localizer().translate_with(
            "PAGE_SUMMARY",
            &[
                ("page", page.as_str()),
                ("pages", pages.as_str()),
                ("total", total.as_str()),
                ("checked", checked.as_str()),
            ],
        )
    }

    /// Renders the help overlay.
    pub(super) fn render_help_overlay() -> String {
        let help_text = r"
=== Keyboard Shortcuts ===

Table:
  j, Down        Move cursor down
  k, Up          Move cursor up
  l, Right, PgDn Next page
  h, Left, PgUp  Previous page
  Space          Check or uncheck the row
  /              Search by name
  Esc            Clear the search keyword
  r              Refresh

Actions:
  a              Add a repository
  e              Edit the row under the cursor
  d              Delete the row under the cursor
  D              Delete all checked rows

Form:
  Tab            Next field
  Enter          Save
  Esc            Cancel

Delete confirmation:
  Enter, y       Confirm
  Esc, n         Cancel

Other:
  ?              Toggle this help
  q              Quit

Press any key to close this help.
";
        help_text.to_owned()
    }
}
