//! Active modal and the records it operates on.
//!
//! At most one modal is open at a time. Closing it, by cancel or by success,
//! always returns to [`ModalKind::None`] with an empty selection.

use crate::console::models::RepoRecord;

/// Which modal is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalKind {
    /// No modal; keys drive the list.
    #[default]
    None,
    /// Management form with no record.
    Create,
    /// Management form for one record.
    Edit,
    /// Delete confirmation for one or more records.
    Delete,
}

/// Modal visibility, selection, and in-flight flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    kind: ModalKind,
    selection: Vec<RepoRecord>,
    pending: bool,
    error: Option<String>,
}

impl ModalState {
    /// Opens `kind` scoped to `selection`, replacing any open modal.
    pub fn open(&mut self, kind: ModalKind, selection: Vec<RepoRecord>) {
        *self = Self {
            kind,
            selection,
            pending: false,
            error: None,
        };
    }

    /// Closes the modal and clears the selection.
    pub fn close(&mut self) {
        *self = Self::default();
    }

    /// Marks the modal's request as in flight.
    ///
    /// Returns `false` when a request is already pending or no modal is
    /// open, in which case the caller must not issue another request.
    pub fn begin_request(&mut self) -> bool {
        if self.pending || matches!(self.kind, ModalKind::None) {
            return false;
        }
        self.pending = true;
        self.error = None;
        true
    }

    /// Records a failed request; the modal and selection stay as they are.
    pub fn fail(&mut self, message: &str) {
        self.pending = false;
        self.error = Some(message.to_owned());
    }

    /// The open modal.
    #[must_use]
    pub const fn kind(&self) -> ModalKind {
        self.kind
    }

    /// Whether any modal is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self.kind, ModalKind::None)
    }

    /// Records the modal operates on.
    #[must_use]
    pub fn selection(&self) -> &[RepoRecord] {
        &self.selection
    }

    /// Whether a request is in flight.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    /// Error from the last failed request.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
