//! Query parameter formatting for the repository list endpoint.
//!
//! Table state (a 0-based page index, column filters, and fixed table
//! parameters) is turned into the flat query the console expects. Filter-like
//! parameters are folded into a single comma-separated `conditions` string,
//! e.g. `status=active,keyword=nginx`.

use std::collections::BTreeMap;

use super::pagination::DEFAULT_PAGE_LIMIT;

/// Column filter captured by the table's search box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableFilter {
    /// Field the filter applies to (the searchable column).
    pub field: String,
    /// Raw filter value as typed.
    pub value: String,
}

impl TableFilter {
    /// Creates a filter for the given field.
    #[must_use]
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Fixed parameters the table sends with every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParameters {
    /// Ordering key.
    pub order: String,
    /// Whether to sort descending.
    pub reverse: bool,
    /// Status filter folded into `conditions`.
    pub status: Option<String>,
    /// Additional `key=value` conditions, folded after the status.
    pub conditions: BTreeMap<String, String>,
}

impl ListParameters {
    /// Repository table parameters: newest first, active repositories only.
    #[must_use]
    pub fn repositories() -> Self {
        Self {
            order: "create_time".to_owned(),
            reverse: true,
            status: Some("active".to_owned()),
            conditions: BTreeMap::new(),
        }
    }
}

/// Table request state before formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRequest {
    /// Fixed table parameters.
    pub parameters: ListParameters,
    /// 0-based page index.
    pub page_index: u32,
    /// Page size.
    pub limit: u32,
    /// Active column filters; the first one carries the search keyword.
    pub filters: Vec<TableFilter>,
}

impl TableRequest {
    /// Creates a request for the first page with no filters.
    #[must_use]
    pub const fn new(parameters: ListParameters) -> Self {
        Self {
            parameters,
            page_index: 0,
            limit: DEFAULT_PAGE_LIMIT,
            filters: Vec::new(),
        }
    }

    /// Sets the 0-based page index.
    #[must_use]
    pub const fn with_page_index(mut self, page_index: u32) -> Self {
        self.page_index = page_index;
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Replaces the filters with a single keyword filter on the name column.
    #[must_use]
    pub fn with_keyword(mut self, keyword: Option<&str>) -> Self {
        self.filters = keyword
            .map(|value| vec![TableFilter::new("name", value)])
            .unwrap_or_default();
        self
    }

    /// Returns the search keyword, if one is set and non-empty.
    #[must_use]
    pub fn keyword(&self) -> Option<&str> {
        self.filters
            .first()
            .map(|filter| filter.value.as_str())
            .filter(|value| !value.is_empty())
    }
}

/// Formatted query sent to the list endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// 1-based page number.
    pub page: u32,
    /// Page size.
    pub limit: u32,
    /// Ordering key.
    pub order: String,
    /// Whether to sort descending.
    pub reverse: bool,
    /// Comma-joined `key=value` conditions.
    pub conditions: Option<String>,
}

impl ListQuery {
    /// Returns the query as ordered name/value pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
            ("order", self.order.clone()),
        ];
        if self.reverse {
            pairs.push(("reverse", "true".to_owned()));
        }
        if let Some(conditions) = &self.conditions {
            pairs.push(("conditions", conditions.clone()));
        }
        pairs
    }
}

/// Base formatter: folds status and extra conditions into `conditions`.
///
/// `page` is taken as already 1-based.
#[must_use]
pub fn format_list_query(parameters: &ListParameters, page: u32, limit: u32) -> ListQuery {
    let folded: Vec<String> = parameters
        .status
        .iter()
        .map(|status| format!("status={status}"))
        .chain(
            parameters
                .conditions
                .iter()
                .map(|(key, value)| format!("{key}={value}")),
        )
        .collect();

    ListQuery {
        page,
        limit,
        order: parameters.order.clone(),
        reverse: parameters.reverse,
        conditions: (!folded.is_empty()).then(|| folded.join(",")),
    }
}

/// Turns table state into the list endpoint query.
///
/// The page index becomes a 1-based page number. Without a keyword the base
/// formatter's output is returned as is; with one, `,keyword=<value>` is
/// appended to the base conditions. The keyword is not escaped.
///
/// # Example
///
/// ```
/// use apprepo::console::query::{ListParameters, TableRequest, transform_request_params};
///
/// let request = TableRequest::new(ListParameters::repositories())
///     .with_page_index(0)
///     .with_keyword(Some("nginx"));
/// let query = transform_request_params(&request);
/// assert_eq!(query.page, 1);
/// assert_eq!(query.conditions.as_deref(), Some("status=active,keyword=nginx"));
/// ```
#[must_use]
pub fn transform_request_params(request: &TableRequest) -> ListQuery {
    let formatted = format_list_query(
        &request.parameters,
        request.page_index.saturating_add(1),
        request.limit,
    );

    let Some(keyword) = request.keyword() else {
        return formatted;
    };

    let base = formatted.conditions.clone().unwrap_or_default();
    ListQuery {
        conditions: Some(format!("{base},keyword={keyword}")),
        ..formatted
    }
}
