//! Message lookup for on-screen text.
//!
//! Screen code never embeds user-facing strings directly; it asks a
//! [`Localizer`] for a message key. The built-in [`MessageCatalog`] carries
//! English text and falls back to the key itself for unknown messages.

use std::collections::BTreeMap;

/// Translates message keys into display text.
pub trait Localizer: Send + Sync {
    /// Returns the text for `key`.
    fn translate(&self, key: &str) -> String;

    /// Returns the text for `key` with `{name}` placeholders substituted.
    fn translate_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        args.iter()
            .fold(self.translate(key), |text, (name, value)| {
                text.replace(&format!("{{{name}}}"), value)
            })
    }
}

const ENGLISH: &[(&str, &str)] = &[
    ("APP_REPO", "App Repositories"),
    (
        "APP_REPO_DESC",
        "App repositories provide apps that can be deployed into the workspace.",
    ),
    ("APP_REPOSITORY", "app repository"),
    (
        "APP_REPOSITORY_EMPTY_DESC",
        "Add an app repository to make its apps available in this workspace.",
    ),
    ("NO_APP_REPO_FOUND", "No App Repository Found"),
    ("NAME", "Name"),
    ("STATUS", "Status"),
    ("URL", "URL"),
    ("DESCRIPTION", "Description"),
    ("APP_REPO_STATUS_SYNCING", "Syncing"),
    ("APP_REPO_STATUS_SUCCESSFUL", "Successful"),
    ("APP_REPO_STATUS_FAILED", "Failed"),
    ("APP_REPO_STATUS_ACTIVE", "Active"),
    ("ADD", "Add"),
    ("EDIT_INFORMATION", "Edit Information"),
    ("DELETE", "Delete"),
    ("DELETE_MULTIPLE", "Delete Selected"),
    ("DELETED_SUCCESSFUL", "Deleted successfully."),
    ("SEARCH_BY_NAME", "Search by name"),
    ("ADD_APP_REPO", "Add App Repository"),
    ("EDIT_APP_REPO", "Edit App Repository"),
    ("DELETE_TITLE", "Delete {resource}"),
    ("DELETE_CONFIRM_DESC", "The following {resource} will be deleted:"),
    ("CONFIRM_HINT", "Enter:confirm  Esc:cancel"),
    ("FORM_HINT", "Tab:next field  Enter:save  Esc:cancel"),
    ("DELETING", "Deleting..."),
    ("SAVING", "Saving..."),
    ("LOADING", "Loading..."),
    ("PAGE_SUMMARY", "Page {page} of {pages} ({total} total, {checked} selected)"),
];

/// Key/value message table with English defaults.
///
/// # Example
///
/// ```
/// use apprepo::tui::i18n::{Localizer, MessageCatalog};
///
/// let catalog = MessageCatalog::english().with_override("DELETE", "Remove");
/// assert_eq!(catalog.translate("DELETE"), "Remove");
/// assert_eq!(catalog.translate("UNKNOWN_KEY"), "UNKNOWN_KEY");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    messages: BTreeMap<String, String>,
}

impl MessageCatalog {
    /// Creates a catalog holding the built-in English messages.
    #[must_use]
    pub fn english() -> Self {
        Self {
            messages: ENGLISH
                .iter()
                .map(|(key, text)| ((*key).to_owned(), (*text).to_owned()))
                .collect(),
        }
    }

    /// Replaces or adds one message.
    #[must_use]
    pub fn with_override(mut self, key: &str, text: &str) -> Self {
        self.messages.insert(key.to_owned(), text.to_owned());
        self
    }
}

impl Localizer for MessageCatalog {
    fn translate(&self, key: &str) -> String {
        self.messages
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_owned())
    }
}
