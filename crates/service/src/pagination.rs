//! Pagination utilities for service layer
//!
//! `Pagination` normalizes raw query input; `Page` is the listing shape returned to clients.

use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: i64 = 100;

/// Pagination parameters as received from the client
#[derive(Clone, Copy, Debug)]
pub struct Pagination {
    /// 0-based page index
    pub page: i64,
    /// items per page
    pub size: i64,
}

impl Pagination {
    /// Clamp to sane bounds and convert to `u64` (page index, page size).
    /// `page * size` always fits a Postgres bigint OFFSET.
    pub fn normalize(self) -> (u64, u64) {
        let size = self.size.clamp(1, MAX_PAGE_SIZE);
        let page = self.page.clamp(0, i64::MAX / size);
        (page as u64, size as u64)
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { page: 0, size: DEFAULT_PAGE_SIZE } }
}

/// One page of a listing
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u64,
    /// 0-based index of this page
    pub number: u64,
    pub size: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, total_elements: u64, number: u64, size: u64) -> Self {
        let total_pages = if size == 0 { 0 } else { total_elements.div_ceil(size) };
        Self { content, total_elements, total_pages, number, size }
    }
}

#[cfg(test)]
mod tests {
    use super::{Page, Pagination};

    #[test]
    fn normalize_clamps_zero_size_and_negative_page() {
        let (idx, size) = Pagination { page: -3, size: 0 }.normalize();
        assert_eq!(idx, 0);
        assert_eq!(size, 1);
    }

    #[test]
    fn normalize_clamps_upper_bound() {
        let (idx, size) = Pagination { page: 5, size: 1000 }.normalize();
        assert_eq!(idx, 5);
        assert_eq!(size, 100);
    }

    #[test]
    fn normalize_keeps_offset_in_range() {
        let (idx, size) = Pagination { page: i64::MAX, size: 10 }.normalize();
        assert_eq!(size, 10);
        assert_eq!(idx, (i64::MAX / 10) as u64);
        assert!(idx.checked_mul(size).is_some_and(|off| off <= i64::MAX as u64));

        let (idx, size) = Pagination { page: i64::MAX, size: i64::MAX }.normalize();
        assert!(idx * size <= i64::MAX as u64);
    }

    #[test]
    fn default_values_are_sane() {
        let d = Pagination::default();
        assert_eq!(d.page, 0);
        assert_eq!(d.size, 10);
    }

    #[test]
    fn total_pages_rounds_up() {
        let p: Page<u8> = Page::new(vec![], 21, 0, 10);
        assert_eq!(p.total_pages, 3);
        let empty: Page<u8> = Page::new(vec![], 0, 0, 10);
        assert_eq!(empty.total_pages, 0);
    }

    #[test]
    fn serializes_camel_case() {
        let p = Page::new(vec![1, 2], 2, 0, 10);
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(v["totalElements"], 2);
        assert_eq!(v["totalPages"], 1);
        assert_eq!(v["number"], 0);
    }
}
