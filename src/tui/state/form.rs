//! Management form state for creating and editing repositories.

use crate::console::error::ConsoleError;
use crate::console::models::{RepoDraft, RepoRecord};

/// Focusable form fields, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    /// Display name.
    #[default]
    Name,
    /// Source URL.
    Url,
    /// Free-form description.
    Description,
}

impl FormField {
    /// The field after this one, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Url,
            Self::Url => Self::Description,
            Self::Description => Self::Name,
        }
    }

    /// Message key of the field label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Name => "NAME",
            Self::Url => "URL",
            Self::Description => "DESCRIPTION",
        }
    }
}

/// Field values and focus of the management form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    name: String,
    url: String,
    description: String,
    focus: FormField,
    error: Option<String>,
}

impl FormState {
    /// An empty form for a new repository.
    #[must_use]
    pub fn for_create() -> Self {
        Self::default()
    }

    /// A form pre-populated from `record`.
    #[must_use]
    pub fn for_edit(record: &RepoRecord) -> Self {
        Self {
            name: record.name.clone().unwrap_or_default(),
            url: record.url.clone(),
            description: record.description.clone().unwrap_or_default(),
            ..Self::default()
        }
    }

    /// Value of `field`.
    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Url => &self.url,
            FormField::Description => &self.description,
        }
    }

    /// Focused field.
    #[must_use]
    pub const fn focus(&self) -> FormField {
        self.focus
    }

    /// Inline validation error, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Moves focus to the next field.
    pub const fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Appends a character to the focused field.
    pub fn push_char(&mut self, ch: char) {
        self.focused_mut().push(ch);
    }

    /// Removes the last character of the focused field.
    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    /// Validates the fields into a draft.
    ///
    /// On failure the error is kept for inline display.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Validation`] when the name is blank or the URL
    /// is not absolute.
    pub fn draft(&mut self) -> Result<RepoDraft, ConsoleError> {
        let result = RepoDraft::new(&self.name, &self.url, Some(&self.description));
        self.error = result.as_ref().err().map(ToString::to_string);
        result
    }

    const fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Name => &mut self.name,
            FormField::Url => &mut self.url,
            FormField::Description => &mut self.description,
        }
    }
}
