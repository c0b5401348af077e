// Copyright 2025 Cowboy AI, LLC.

//! Query support for persistence layer

use serde::{Deserialize, Serialize};

/// Pagination options, applied after filtering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryOptions {
    /// Number of results to skip
    #[serde(default)]
    pub skip: Option<usize>,
    /// Maximum number of results
    #[serde(default)]
    pub limit: Option<usize>,
}

impl QueryOptions {
    /// No pagination
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of results to skip
    pub fn skip(mut self, skip: usize) -> Self {
        self.skip = Some(skip);
        self
    }

    /// Set the limit
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Slice an already filtered, ordered list
    pub fn apply<T>(&self, items: Vec<T>) -> ResultSet<T> {
        let total_count = items.len();
        let skip = self.skip.unwrap_or(0);
        let limit = self.limit.unwrap_or(usize::MAX);
        let items: Vec<T> = items.into_iter().skip(skip).take(limit).collect();
        let has_more = skip.saturating_add(items.len()) < total_count;
        ResultSet {
            items,
            total_count,
            has_more,
        }
    }
}

/// Query result with metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSet<T> {
    /// The actual results
    pub items: Vec<T>,
    /// Total count (before pagination)
    pub total_count: usize,
    /// Whether there are more results after this page
    pub has_more: bool,
}

impl<T> ResultSet<T> {
    /// Wrap a complete, unpaginated result
    pub fn new(items: Vec<T>) -> Self {
        let total_count = items.len();
        Self {
            items,
            total_count,
            has_more: false,
        }
    }

    /// Number of items in this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the items
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Take the items
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Map the items to a different type
    pub fn map<U, F>(self, f: F) -> ResultSet<U>
    where
        F: FnMut(T) -> U,
    {
        ResultSet {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            has_more: self.has_more,
        }
    }
}

impl<T> IntoIterator for ResultSet<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ResultSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Pagination helper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page (1-based)
    pub page: usize,
    /// Items per page
    pub per_page: usize,
    /// Total pages
    pub total_pages: usize,
    /// Total items
    pub total_items: usize,
}

impl Pagination {
    /// Create pagination from limit/skip
    pub fn from_query(limit: usize, skip: usize, total_items: usize) -> Self {
        let per_page = limit.max(1);
        let page = (skip / per_page) + 1;
        let total_pages = total_items.div_ceil(per_page);

        Self {
            page,
            per_page,
            total_pages,
            total_items,
        }
    }

    /// Convert to query options
    ///
    /// A page of 0 is read as the first page.
    pub fn to_options(&self) -> QueryOptions {
        QueryOptions::new()
            .limit(self.per_page)
            .skip(self.page.saturating_sub(1).saturating_mul(self.per_page))
    }

    /// Check if there's a next page
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Check if there's a previous page
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}
