//! Pagination state for repository listings.
//!
//! The console reports a total item count rather than navigation links, so
//! page availability is derived from the current page, the page size, and the
//! total.

use super::error::ConsoleError;

/// Largest page size the console accepts.
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Default page size used by the repository table.
pub const DEFAULT_PAGE_LIMIT: u32 = 10;

/// Current page state for paginated results.
///
/// # Example
///
/// ```
/// use apprepo::console::pagination::PageInfo;
///
/// let info = PageInfo::new(2, 10, 25);
/// assert_eq!(info.total_pages(), 3);
/// assert!(info.has_next());
/// assert!(info.has_prev());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Current page number (1-based).
    current_page: u32,
    /// Items per page.
    limit: u32,
    /// Total number of matching items reported by the server.
    total_items: u64,
}

impl PageInfo {
    /// Creates page info for the given page, page size, and total.
    #[must_use]
    pub const fn new(current_page: u32, limit: u32, total_items: u64) -> Self {
        Self {
            current_page,
            limit,
            total_items,
        }
    }

    /// Returns the current page number (1-based).
    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Returns the number of items per page.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Returns the total number of items across all pages.
    #[must_use]
    pub const fn total_items(&self) -> u64 {
        self.total_items
    }

    /// Returns the number of pages, never less than one.
    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        if self.limit == 0 || self.total_items == 0 {
            return 1;
        }
        self.total_items.div_ceil(self.limit as u64)
    }

    /// Returns true if more pages exist after the current one.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        (self.current_page as u64) < self.total_pages()
    }

    /// Returns true if pages exist before the current one.
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.current_page > 1
    }
}

impl Default for PageInfo {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_LIMIT, 0)
    }
}

/// Checks page and limit against what the console accepts.
///
/// # Errors
///
/// Returns [`ConsoleError::InvalidPagination`] when `page` is zero or `limit`
/// is outside `1..=100`.
pub fn validate_pagination(page: u32, limit: u32) -> Result<(), ConsoleError> {
    if page == 0 {
        return Err(ConsoleError::InvalidPagination {
            message: "page must be at least 1".to_owned(),
        });
    }

    if limit == 0 {
        return Err(ConsoleError::InvalidPagination {
            message: "limit must be at least 1".to_owned(),
        });
    }

    if limit > MAX_PAGE_LIMIT {
        return Err(ConsoleError::InvalidPagination {
            message: format!("limit must not exceed {MAX_PAGE_LIMIT}"),
        });
    }

    Ok(())
}
