//! Delete confirmation dialog.
//!
//! Lists the display names of every record about to be deleted. While the
//! request is in flight the key hint is replaced by a loading line.

use crate::tui::i18n::Localizer;

/// Data needed to render the confirmation.
pub struct DeleteConfirmViewContext<'a> {
    /// Whether the dialog is shown at all.
    pub visible: bool,
    /// Message key of the resource type, e.g. `APP_REPOSITORY`.
    pub resource_key: &'a str,
    /// Display names of the records to delete.
    pub names: &'a [&'a str],
    /// Whether the delete request is in flight.
    pub loading: bool,
    /// Error from the last attempt.
    pub error: Option<&'a str>,
    /// Text lookup.
    pub localizer: &'a dyn Localizer,
}

/// Component for the delete confirmation dialog.
#[derive(Debug, Clone, Default)]
pub struct DeleteConfirmComponent;

impl DeleteConfirmComponent {
    /// Renders the dialog, or nothing when hidden.
    #[must_use]
    pub fn view(ctx: &DeleteConfirmViewContext<'_>) -> String {
        if !ctx.visible {
            return String::new();
        }

        let resource = ctx.localizer.translate(ctx.resource_key);
        let args = [("resource", resource.as_str())];
        let mut output = format!(
            "== {} ==\n{}\n",
            ctx.localizer.translate_with("DELETE_TITLE", &args),
            ctx.localizer.translate_with("DELETE_CONFIRM_DESC", &args),
        );
        for name in ctx.names {
            output.push_str("  - ");
            output.push_str(name);
            output.push('\n');
        }
        if let Some(error) = ctx.error {
            output.push_str("Error: ");
            output.push_str(error);
            output.push('\n');
        }
        let footer = if ctx.loading { "DELETING" } else { "CONFIRM_HINT" };
        output.push_str(&ctx.localizer.translate(footer));
        output.push('\n');
        output
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{DeleteConfirmComponent, DeleteConfirmViewContext};
    use crate::tui::i18n::MessageCatalog;

    fn render(names: &[&str], loading: bool, error: Option<&str>) -> String {
        let catalog = MessageCatalog::english();
        DeleteConfirmComponent::view(&DeleteConfirmViewContext {
            visible: true,
            resource_key: "APP_REPOSITORY",
            names,
            loading,
            error,
            localizer: &catalog,
        })
    }

    #[rstest]
    fn lists_every_name_under_localised_title() {
        let output = render(&["Stable", "Bitnami"], false, None);

        assert!(output.starts_with("== Delete app repository ==\n"));
        assert!(output.contains("  - Stable\n"));
        assert!(output.contains("  - Bitnami\n"));
        assert!(output.ends_with("Enter:confirm  Esc:cancel\n"));
    }

    #[rstest]
    fn loading_replaces_the_key_hint() {
        let output = render(&["Stable"], true, None);

        assert!(output.contains("Deleting..."));
        assert!(!output.contains("Enter:confirm"));
    }

    #[rstest]
    fn failure_is_shown_inside_the_dialog() {
        let output = render(&["Stable"], false, Some("boom"));
        assert!(output.contains("Error: boom\n"));
    }

    #[rstest]
    fn hidden_dialog_renders_nothing() {
        let catalog = MessageCatalog::english();
        let output = DeleteConfirmComponent::view(&DeleteConfirmViewContext {
            visible: false,
            resource_key: "APP_REPOSITORY",
            names: &["Stable"],
            loading: false,
            error: None,
            localizer: &catalog,
        });
        assert!(output.is_empty());
    }
}
