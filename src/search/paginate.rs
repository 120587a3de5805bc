//! Pagination arithmetic and lenient parameter coercion.

use serde::Serialize;

use crate::config::DEFAULT_PAGE_LIMIT;

/// Pagination metadata for one result window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    /// Full match count, independent of the window
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
    pub has_more: bool,
    pub current_page: usize,
    pub total_pages: usize,
}

/// Compute pagination metadata for a window of `limit` entries starting at
/// `offset` over `total` matches. `limit` must already be coerced to >= 1.
pub fn page_info(total: usize, limit: usize, offset: usize) -> PaginationInfo {
    PaginationInfo {
        total,
        limit,
        offset,
        has_more: offset + limit < total,
        current_page: offset / limit + 1,
        total_pages: total.div_ceil(limit),
    }
}

/// Coerce a raw `limit` parameter. Missing, non-numeric, or non-positive
/// values fall back to [`DEFAULT_PAGE_LIMIT`].
pub fn coerce_limit(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.parse::<i64>().ok())
        .filter(|&n| n > 0)
        .map(|n| n as usize)
        .unwrap_or(DEFAULT_PAGE_LIMIT)
}

/// Coerce a raw `offset` parameter. Missing, non-numeric, or negative
/// values fall back to 0.
pub fn coerce_offset(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.parse::<i64>().ok())
        .filter(|&n| n >= 0)
        .map(|n| n as usize)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_more_boundary() {
        assert!(page_info(3, 1, 1).has_more);
        // offset + limit == total: nothing more
        assert!(!page_info(3, 1, 2).has_more);
        assert!(!page_info(3, 20, 0).has_more);
        assert!(page_info(21, 20, 0).has_more);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(page_info(3, 1, 0).total_pages, 3);
        assert_eq!(page_info(3, 2, 0).total_pages, 2);
        assert_eq!(page_info(40, 20, 0).total_pages, 2);
        assert_eq!(page_info(41, 20, 0).total_pages, 3);
    }

    #[test]
    fn test_current_page() {
        assert_eq!(page_info(100, 20, 0).current_page, 1);
        assert_eq!(page_info(100, 20, 19).current_page, 1);
        assert_eq!(page_info(100, 20, 20).current_page, 2);
        assert_eq!(page_info(3, 1, 1).current_page, 2);
    }

    #[test]
    fn test_empty_result_set() {
        let info = page_info(0, 20, 0);
        assert_eq!(info.total, 0);
        assert_eq!(info.current_page, 1);
        assert_eq!(info.total_pages, 0);
        assert!(!info.has_more);
    }

    #[test]
    fn test_offset_past_total() {
        let info = page_info(5, 20, 40);
        assert!(!info.has_more);
        assert_eq!(info.current_page, 3);
        assert_eq!(info.total_pages, 1);
    }

    #[test]
    fn test_limit_coercion() {
        assert_eq!(coerce_limit(Some("50")), 50);
        assert_eq!(coerce_limit(Some("0")), DEFAULT_PAGE_LIMIT);
        assert_eq!(coerce_limit(Some("-3")), DEFAULT_PAGE_LIMIT);
        assert_eq!(coerce_limit(Some("twenty")), DEFAULT_PAGE_LIMIT);
        assert_eq!(coerce_limit(Some("")), DEFAULT_PAGE_LIMIT);
        assert_eq!(coerce_limit(None), DEFAULT_PAGE_LIMIT);
    }

    #[test]
    fn test_offset_coercion() {
        assert_eq!(coerce_offset(Some("40")), 40);
        assert_eq!(coerce_offset(Some("0")), 0);
        assert_eq!(coerce_offset(Some("-1")), 0);
        assert_eq!(coerce_offset(Some("ten")), 0);
        assert_eq!(coerce_offset(None), 0);
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(page_info(3, 1, 1)).unwrap();
        assert_eq!(value["hasMore"], true);
        assert_eq!(value["currentPage"], 2);
        assert_eq!(value["totalPages"], 3);
    }
}
