//! Create/edit form for a repository.

use crate::tui::i18n::Localizer;
use crate::tui::state::{FormField, FormState};

use super::text_fit::truncate_with_ellipsis;

const FIELDS: [FormField; 3] = [FormField::Name, FormField::Url, FormField::Description];
const LABEL_WIDTH: usize = 14;

/// Data needed to render the form.
pub struct ManageFormViewContext<'a> {
    /// Whether the form is shown at all.
    pub visible: bool,
    /// Whether an existing record is being edited.
    pub editing: bool,
    /// Field values and focus.
    pub form: &'a FormState,
    /// Whether the save request is in flight.
    pub saving: bool,
    /// Error from the last save attempt.
    pub request_error: Option<&'a str>,
    /// Text lookup.
    pub localizer: &'a dyn Localizer,
    /// Terminal width in columns.
    pub max_width: usize,
}

/// Component for the management form.
#[derive(Debug, Clone, Default)]
pub struct ManageFormComponent;

impl ManageFormComponent {
    /// Renders the form, or nothing when hidden.
    ///
    /// The focused field is marked with `>` and shows a trailing cursor.
    /// Validation errors take precedence over request errors.
    #[must_use]
    pub fn view(ctx: &ManageFormViewContext<'_>) -> String {
        if !ctx.visible {
            return String::new();
        }

        let title_key = if ctx.editing {
            "EDIT_APP_REPO"
        } else {
            "ADD_APP_REPO"
        };
        let mut output = format!("== {} ==\n", ctx.localizer.translate(title_key));
        let value_width = ctx.max_width.saturating_sub(LABEL_WIDTH + 4).max(8);

        for field in FIELDS {
            let focused = field == ctx.form.focus();
            let marker = if focused { '>' } else { ' ' };
            let cursor = if focused { "_" } else { "" };
            let label = format!("{}:", ctx.localizer.translate(field.label_key()));
            let value = truncate_with_ellipsis(ctx.form.value(field), value_width);
            output.push_str(&format!(
                "{marker} {label:<LABEL_WIDTH$} {value}{cursor}\n"
            ));
        }

        if let Some(error) = ctx.form.error().or(ctx.request_error) {
            output.push_str("Error: ");
            output.push_str(error);
            output.push('\n');
        }

        let footer = if ctx.saving { "SAVING" } else { "FORM_HINT" };
        output.push_str(&ctx.localizer.translate(footer));
        output.push('\n');
        output
    }
}
