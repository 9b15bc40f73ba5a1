//! Table rows, cursor, checked rows, and search state.
//!
//! Checked rows are tracked by row key so they survive a refetch of the same
//! page. The page index is 0-based, matching the table's own numbering; it is
//! translated to a 1-based page only when the request is formatted.

use std::collections::BTreeSet;

use crate::console::models::{RepoPage, RepoRecord};
use crate::console::pagination::PageInfo;
use crate::console::query::{ListParameters, TableRequest};

/// State of the repository table.
#[derive(Debug, Clone, Default)]
pub struct ListState {
    records: Vec<RepoRecord>,
    page_info: PageInfo,
    page_index: u32,
    cursor: usize,
    checked: BTreeSet<String>,
    keyword: Option<String>,
    search_input: Option<String>,
}

impl ListState {
    /// Rows on the current page.
    #[must_use]
    pub fn records(&self) -> &[RepoRecord] {
        &self.records
    }

    /// Pagination of the current page.
    #[must_use]
    pub const fn page_info(&self) -> &PageInfo {
        &self.page_info
    }

    /// 0-based page index.
    #[must_use]
    pub const fn page_index(&self) -> u32 {
        self.page_index
    }

    /// Cursor row.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Applied search keyword.
    #[must_use]
    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref()
    }

    /// Text being typed in the search box, when search entry is active.
    #[must_use]
    pub fn search_input(&self) -> Option<&str> {
        self.search_input.as_deref()
    }

    /// Whether the row with `row_key` is checked.
    #[must_use]
    pub fn is_checked(&self, row_key: &str) -> bool {
        self.checked.contains(row_key)
    }

    /// Number of checked rows.
    #[must_use]
    pub fn checked_count(&self) -> usize {
        self.checked.len()
    }

    /// Row under the cursor.
    #[must_use]
    pub fn selected_record(&self) -> Option<&RepoRecord> {
        self.records.get(self.cursor)
    }

    /// Checked rows in table order.
    #[must_use]
    pub fn checked_records(&self) -> Vec<RepoRecord> {
        self.records
            .iter()
            .filter(|record| self.checked.contains(record.row_key()))
            .cloned()
            .collect()
    }

    /// Builds the request for the current page.
    #[must_use]
    pub fn table_request(&self, parameters: &ListParameters, limit: u32) -> TableRequest {
        TableRequest::new(parameters.clone())
            .with_page_index(self.page_index)
            .with_limit(limit)
            .with_keyword(self.keyword.as_deref())
    }

    /// Replaces the rows with a freshly loaded page.
    ///
    /// Checked rows that are no longer present are dropped and the cursor is
    /// clamped to the new row count.
    pub fn apply_page(&mut self, page: RepoPage) {
        self.records = page.items;
        self.page_info = page.page_info;
        let present: BTreeSet<&str> = self.records.iter().map(RepoRecord::row_key).collect();
        self.checked.retain(|key| present.contains(key.as_str()));
        self.clamp_cursor();
    }

    /// Moves back to the last page when the current one came back empty
    /// although rows remain, as happens after deleting the only row of the
    /// last page. Returns `true` when the page index moved.
    pub fn clamp_to_last_page(&mut self) -> bool {
        if !self.records.is_empty() || self.page_info.total_items() == 0 {
            return false;
        }
        let last = u32::try_from(self.page_info.total_pages().saturating_sub(1))
            .unwrap_or(u32::MAX);
        if self.page_index <= last {
            return false;
        }
        self.page_index = last;
        self.reset_for_new_page();
        true
    }

    /// Moves the cursor up one row.
    pub const fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor down one row, stopping at the last row.
    pub fn cursor_down(&mut self) {
        let last = self.records.len().saturating_sub(1);
        self.cursor = self.cursor.saturating_add(1).min(last);
    }

    /// Toggles the check mark on the cursor row.
    pub fn toggle_check(&mut self) {
        let Some(key) = self.selected_record().map(|record| record.row_key().to_owned()) else {
            return;
        };
        if !self.checked.remove(&key) {
            self.checked.insert(key);
        }
    }

    /// Clears every check mark.
    pub fn clear_checked(&mut self) {
        self.checked.clear();
    }

    /// Advances to the next page. Returns `false` on the last page.
    pub fn next_page(&mut self) -> bool {
        if !self.page_info.has_next() {
            return false;
        }
        self.page_index = self.page_index.saturating_add(1);
        self.reset_for_new_page();
        true
    }

    /// Returns to the previous page. Returns `false` on the first page.
    pub fn prev_page(&mut self) -> bool {
        if self.page_index == 0 {
            return false;
        }
        self.page_index -= 1;
        self.reset_for_new_page();
        true
    }

    /// Starts search entry, seeded with the applied keyword.
    pub fn begin_search(&mut self) {
        self.search_input = Some(self.keyword.clone().unwrap_or_default());
    }

    /// Appends a character to the search box.
    pub fn push_search_char(&mut self, ch: char) {
        if let Some(input) = self.search_input.as_mut() {
            input.push(ch);
        }
    }

    /// Removes the last character from the search box.
    pub fn pop_search_char(&mut self) {
        if let Some(input) = self.search_input.as_mut() {
            input.pop();
        }
    }

    /// Applies the typed keyword and returns to the first page.
    ///
    /// A blank keyword clears the search.
    pub fn submit_search(&mut self) {
        let typed = self.search_input.take().unwrap_or_default();
        let trimmed = typed.trim();
        self.keyword = (!trimmed.is_empty()).then(|| trimmed.to_owned());
        self.page_index = 0;
        self.reset_for_new_page();
    }

    /// Leaves search entry without changing the applied keyword.
    pub fn cancel_search(&mut self) {
        self.search_input = None;
    }

    /// Removes the applied keyword. Returns `false` when none was set.
    pub fn clear_keyword(&mut self) -> bool {
        if self.keyword.take().is_none() {
            return false;
        }
        self.page_index = 0;
        self.reset_for_new_page();
        true
    }

    fn reset_for_new_page(&mut self) {
        self.cursor = 0;
        self.checked.clear();
    }

    fn clamp_cursor(&mut self) {
        let last = self.records.len().saturating_sub(1);
        self.cursor = self.cursor.min(last);
    }
}
