//! Page banner shown above the repository table.

use crate::tui::i18n::Localizer;

/// Renders the localised title and description, one per line.
#[must_use]
pub fn render_banner(localizer: &dyn Localizer, loading: bool) -> String {
    let title = localizer.translate("APP_REPO");
    let description = localizer.translate("APP_REPO_DESC");
    if loading {
        let indicator = localizer.translate("LOADING");
        return format!("{title} [{indicator}]\n{description}\n");
    }
    format!("{title}\n{description}\n")
}
