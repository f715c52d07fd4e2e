//! Pagination types for list operations.

use serde::{Deserialize, Serialize};

/// Default page size when a request omits it.
const DEFAULT_PAGE_SIZE: u64 = 25;

/// Request parameters for paginated queries.
///
/// Pages are zero-based: page 0 is the first page. No upper bound is
/// enforced on `page_size`; callers control the page weight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (zero-based).
    #[serde(default)]
    pub page: u64,
    /// Number of items per page.
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

impl PageRequest {
    /// Create a new page request.
    pub fn new(page: u64, page_size: u64) -> Self {
        Self { page, page_size }
    }

    /// Calculate the SQL `OFFSET` value.
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.page_size)
    }

    /// Return the SQL `LIMIT` value.
    pub fn limit(&self) -> u64 {
        self.page_size
    }

    /// Total pages needed for `total` items at this page size.
    pub fn total_pages(&self, total: u64) -> u64 {
        if self.page_size == 0 {
            0
        } else {
            total.div_ceil(self.page_size)
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_is_zero_based() {
        assert_eq!(PageRequest::new(0, 10).offset(), 0);
        assert_eq!(PageRequest::new(1, 10).offset(), 10);
        assert_eq!(PageRequest::new(3, 25).offset(), 75);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let page = PageRequest::new(0, 10);
        assert_eq!(page.total_pages(0), 0);
        assert_eq!(page.total_pages(10), 1);
        assert_eq!(page.total_pages(11), 2);
        assert_eq!(PageRequest::new(0, 0).total_pages(42), 0);
    }

    #[test]
    fn test_deserialize_defaults() {
        let page: PageRequest = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(page.page, 0);
        assert_eq!(page.page_size, DEFAULT_PAGE_SIZE);
    }
}
