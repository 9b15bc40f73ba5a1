//! Declarative action table for the repository screen.
//!
//! Table, row, and batch actions are plain data. One renderer draws the
//! action bar for any scope and one lookup resolves shortcut keys, so adding
//! an action means adding a row to [`REPO_ACTIONS`] and a transition in the
//! screen's dispatcher.

use super::i18n::Localizer;

/// Where an action applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionScope {
    /// Applies to the table as a whole.
    Table,
    /// Applies to the row under the cursor.
    Item,
    /// Applies to every checked row.
    Batch,
}

/// Screen transition an action triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Open the management form in create mode.
    Create,
    /// Open the management form for the row under the cursor.
    Edit,
    /// Confirm deletion of the row under the cursor.
    Delete,
    /// Confirm deletion of all checked rows.
    BatchDelete,
}

/// Visual emphasis of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionTone {
    /// The main call to action.
    Primary,
    /// Neutral.
    Default,
    /// Destructive.
    Danger,
}

/// One entry in the action table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionDescriptor {
    /// Transition to dispatch.
    pub kind: ActionKind,
    /// Where the action is offered.
    pub scope: ActionScope,
    /// Message key of the label.
    pub label_key: &'static str,
    /// Glyph shown before the label.
    pub icon: &'static str,
    /// Key that triggers the action from the list.
    pub shortcut: char,
    /// Visual emphasis.
    pub tone: ActionTone,
}

/// Actions offered by the repository screen.
pub const REPO_ACTIONS: &[ActionDescriptor] = &[
    ActionDescriptor {
        kind: ActionKind::Create,
        scope: ActionScope::Table,
        label_key: "ADD",
        icon: "+",
        shortcut: 'a',
        tone: ActionTone::Primary,
    },
    ActionDescriptor {
        kind: ActionKind::Edit,
        scope: ActionScope::Item,
        label_key: "EDIT_INFORMATION",
        icon: "~",
        shortcut: 'e',
        tone: ActionTone::Default,
    },
    ActionDescriptor {
        kind: ActionKind::Delete,
        scope: ActionScope::Item,
        label_key: "DELETE",
        icon: "x",
        shortcut: 'd',
        tone: ActionTone::Danger,
    },
    ActionDescriptor {
        kind: ActionKind::BatchDelete,
        scope: ActionScope::Batch,
        label_key: "DELETE_MULTIPLE",
        icon: "x",
        shortcut: 'D',
        tone: ActionTone::Danger,
    },
];

/// Actions offered in `scope`, in table order.
#[must_use]
pub fn actions_for(scope: ActionScope) -> impl Iterator<Item = &'static ActionDescriptor> {
    REPO_ACTIONS
        .iter()
        .filter(move |descriptor| descriptor.scope == scope)
}

/// Resolves a shortcut key to its action.
#[must_use]
pub fn action_for_shortcut(key: char) -> Option<&'static ActionDescriptor> {
    REPO_ACTIONS
        .iter()
        .find(|descriptor| descriptor.shortcut == key)
}

/// Renders the action bar for `scope`, e.g. `[a] + Add`.
///
/// Danger actions are marked with `!` so they stand out on monochrome
/// terminals.
#[must_use]
pub fn render_action_bar(scope: ActionScope, localizer: &dyn Localizer) -> String {
    actions_for(scope)
        .map(|descriptor| {
            let marker = match descriptor.tone {
                ActionTone::Primary => "*",
                ActionTone::Default => "",
                ActionTone::Danger => "!",
            };
            format!(
                "[{}] {} {}{marker}",
                descriptor.shortcut,
                descriptor.icon,
                localizer.translate(descriptor.label_key)
            )
        })
        .collect::<Vec<_>>()
        .join("  ")
}
