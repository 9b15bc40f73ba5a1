//! Repository table component.
//!
//! Renders one row per repository with a check box, the display name, the
//! localised status, and the source URL. The cursor row is prefixed with `>`.
//! Rows without a display name show `-` rather than the identifier.

use crate::console::models::RepoRecord;
use crate::tui::i18n::Localizer;
use crate::tui::state::ListState;

use super::text_fit::fit_cell;

const CHECK_WIDTH: usize = 5;
const NAME_WIDTH: usize = 24;
const STATUS_WIDTH: usize = 12;
const MIN_URL_WIDTH: usize = 8;

/// Data needed to render the table for one frame.
pub struct RepoTableViewContext<'a> {
    /// Rows, cursor, and check marks.
    pub list: &'a ListState,
    /// Text lookup for headers and status labels.
    pub localizer: &'a dyn Localizer,
    /// Terminal width in columns.
    pub max_width: usize,
    /// Rows available for the table body, header excluded.
    pub max_height: usize,
}

/// Component for the repository table.
#[derive(Debug, Clone, Default)]
pub struct RepoTableComponent;

impl RepoTableComponent {
    /// Renders the table or, with no rows, the empty state.
    #[must_use]
    pub fn view(ctx: &RepoTableViewContext<'_>) -> String {
        if ctx.list.records().is_empty() {
            return Self::render_empty(ctx.localizer);
        }

        let url_width = ctx
            .max_width
            .saturating_sub(CHECK_WIDTH + NAME_WIDTH + STATUS_WIDTH + 2)
            .max(MIN_URL_WIDTH);

        let mut output = format!(
            "{}{} {} {}\n",
            " ".repeat(CHECK_WIDTH),
            fit_cell(&ctx.localizer.translate("NAME"), NAME_WIDTH),
            fit_cell(&ctx.localizer.translate("STATUS"), STATUS_WIDTH),
            fit_cell(&ctx.localizer.translate("URL"), url_width),
        );

        let visible = ctx.max_height.max(1);
        let start = ctx.list.cursor().saturating_sub(visible.saturating_sub(1));
        for (index, record) in ctx
            .list
            .records()
            .iter()
            .enumerate()
            .skip(start)
            .take(visible)
        {
            let row = RowView {
                record,
                is_cursor: index == ctx.list.cursor(),
                is_checked: ctx.list.is_checked(record.row_key()),
            };
            output.push_str(&row.render(ctx.localizer, url_width));
            output.push('\n');
        }
        output
    }

    fn render_empty(localizer: &dyn Localizer) -> String {
        format!(
            "  {}\n  {}\n  [a] {}\n",
            localizer.translate("NO_APP_REPO_FOUND"),
            localizer.translate("APP_REPOSITORY_EMPTY_DESC"),
            localizer.translate("ADD_APP_REPO"),
        )
    }
}

struct RowView<'a> {
    record: &'a RepoRecord,
    is_cursor: bool,
    is_checked: bool,
}

impl RowView<'_> {
    fn render(&self, localizer: &dyn Localizer, url_width: usize) -> String {
        let pointer = if self.is_cursor { '>' } else { ' ' };
        let check = if self.is_checked { 'x' } else { ' ' };
        let name = name_or_dash(self.record.name.as_deref());
        let status = localizer.translate(&self.record.status.label_key());
        format!(
            "{pointer}[{check}] {} {} {}",
            fit_cell(name, NAME_WIDTH),
            fit_cell(&status, STATUS_WIDTH),
            fit_cell(&self.record.url, url_width),
        )
        .trim_end()
        .to_owned()
    }
}

fn name_or_dash(name: Option<&str>) -> &str {
    name.filter(|value| !value.trim().is_empty()).unwrap_or("-")
}
