//! Input handling for the TUI application.
//!
//! Keys are mapped according to what has focus: the table, the search box,
//! the management form, or the delete confirmation. While a modal is open
//! only its keys are mapped, so list actions cannot open a second modal.

use crossterm::event::KeyCode;

use super::actions::action_for_shortcut;
use super::messages::AppMsg;

/// What currently receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// The repository table.
    List,
    /// The search box.
    Search,
    /// The create/edit form.
    Form,
    /// The delete confirmation.
    Confirm,
}

/// Maps a key event to an application message for the given context.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message_with_context(
    key: &bubbletea_rs::event::KeyMsg,
    context: InputContext,
) -> Option<AppMsg> {
    match context {
        InputContext::List => map_list_key(key.key),
        InputContext::Search => map_search_key(key.key),
        InputContext::Form => map_form_key(key.key),
        InputContext::Confirm => map_confirm_key(key.key),
    }
}

fn map_list_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::Char('l') | KeyCode::Right | KeyCode::PageDown => Some(AppMsg::NextPage),
        KeyCode::Char('h') | KeyCode::Left | KeyCode::PageUp => Some(AppMsg::PrevPage),
        KeyCode::Char(' ') => Some(AppMsg::ToggleCheck),
        KeyCode::Char('/') => Some(AppMsg::StartSearch),
        KeyCode::Char('r') => Some(AppMsg::RefreshRequested),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        KeyCode::Esc => Some(AppMsg::ClearKeyword),
        KeyCode::Char(ch) => action_for_shortcut(ch).map(|action| AppMsg::Action(action.kind)),
        _ => None,
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_search_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Enter => Some(AppMsg::SubmitSearch),
        KeyCode::Esc => Some(AppMsg::CancelSearch),
        KeyCode::Backspace => Some(AppMsg::SearchBackspace),
        KeyCode::Char(ch) => Some(AppMsg::SearchInput(ch)),
        _ => None,
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_form_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Enter => Some(AppMsg::SubmitForm),
        KeyCode::Esc => Some(AppMsg::CloseModal),
        KeyCode::Tab => Some(AppMsg::FormNextField),
        KeyCode::Backspace => Some(AppMsg::FormBackspace),
        KeyCode::Char(ch) => Some(AppMsg::FormInput(ch)),
        _ => None,
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_confirm_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Enter | KeyCode::Char('y') => Some(AppMsg::ConfirmDelete),
        KeyCode::Esc | KeyCode::Char('n') => Some(AppMsg::CloseModal),
        _ => None,
    }
}
