//! Paginated response envelope used by every list endpoint.

use serde::{Deserialize, Serialize};

/// One page of results, zero-indexed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    #[serde(default)]
    pub page_number: u32,
    #[serde(default)]
    pub page_size: u32,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub last: bool,
}

impl<T> Page<T> {
    /// Whether another page follows this one.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        !self.last && self.page_number + 1 < self.total_pages
    }

    /// Map the page content while keeping the paging metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page_number: self.page_number,
            page_size: self.page_size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            last: self.last,
        }
    }
}

/// Page request parameters, with the defaults list endpoints apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    #[must_use]
    pub const fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 0, size: 20 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_envelope() {
        let json = r#"{
            "content": [1, 2, 3],
            "pageNumber": 0,
            "pageSize": 3,
            "totalElements": 7,
            "totalPages": 3,
            "last": false
        }"#;
        let page: Page<u32> = serde_json::from_str(json).unwrap();
        assert_eq!(page.content, vec![1, 2, 3]);
        assert_eq!(page.total_elements, 7);
        assert!(page.has_next());
    }

    #[test]
    fn last_page_has_no_next() {
        let json = r#"{"content": [], "pageNumber": 2, "pageSize": 3, "totalElements": 7, "totalPages": 3, "last": true}"#;
        let page: Page<u32> = serde_json::from_str(json).unwrap();
        assert!(!page.has_next());
    }

    #[test]
    fn map_keeps_metadata() {
        let page = Page {
            content: vec![1, 2],
            page_number: 1,
            page_size: 2,
            total_elements: 4,
            total_pages: 2,
            last: true,
        };
        let mapped = page.map(|n| n.to_string());
        assert_eq!(mapped.content, vec!["1".to_string(), "2".to_string()]);
        assert_eq!(mapped.page_number, 1);
        assert!(mapped.last);
    }
}
