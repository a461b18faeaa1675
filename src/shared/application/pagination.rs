/// Pagination support for queries
///
/// Pages are zero-based: page 0 is the first window. Parameters coming from
/// the outer request layer are validated here, before any repository call;
/// negative values are rejected instead of clamped.
use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, AppResult};

/// Validated pagination parameters for queries
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PaginationParams {
    page: u32,
    page_size: u32,
}

impl PaginationParams {
    pub fn new(page: i64, page_size: i64) -> AppResult<Self> {
        if page < 0 {
            return Err(AppError::InvalidInput(format!(
                "Page must not be negative, got {}",
                page
            )));
        }
        if page_size < 0 {
            return Err(AppError::InvalidInput(format!(
                "Page size must not be negative, got {}",
                page_size
            )));
        }

        Ok(Self {
            page: page as u32,
            page_size: page_size as u32,
        })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Number of entries to skip before the requested window
    pub fn skip(&self) -> usize {
        self.page as usize * self.page_size as usize
    }

    /// Maximum number of entries in the requested window
    pub fn take(&self) -> usize {
        self.page_size as usize
    }
}

/// One page of results, with the pre-pagination total
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedResult<T> {
    pub results: Vec<T>,
    pub page: u32,
    pub page_size: u32,
    pub total_count: u64,
}

impl<T> PagedResult<T> {
    /// `total_count` is the number of entries before windowing, not the
    /// length of `results`.
    pub fn new(results: Vec<T>, total_count: u64, params: &PaginationParams) -> Self {
        Self {
            results,
            page: params.page(),
            page_size: params.page_size(),
            total_count,
        }
    }

    /// Project the windowed results into another shape, keeping the envelope
    pub fn map<U, F>(self, f: F) -> PagedResult<U>
    where
        F: FnMut(T) -> U,
    {
        PagedResult {
            results: self.results.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_count: self.total_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_zero_based_first_page() {
        let params = PaginationParams::new(0, 20).unwrap();
        assert_eq!(params.page(), 0);
        assert_eq!(params.page_size(), 20);
        assert_eq!(params.skip(), 0);
        assert_eq!(params.take(), 20);
    }

    #[test]
    fn skip_grows_with_page_index() {
        let params = PaginationParams::new(3, 25).unwrap();
        assert_eq!(params.skip(), 75);
    }

    #[test]
    fn rejects_negative_page() {
        let err = PaginationParams::new(-1, 20).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn rejects_negative_page_size() {
        let err = PaginationParams::new(0, -5).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn zero_page_size_is_a_valid_empty_window() {
        let params = PaginationParams::new(0, 0).unwrap();
        assert_eq!(params.take(), 0);
    }

    #[test]
    fn map_keeps_the_envelope() {
        let params = PaginationParams::new(1, 2).unwrap();
        let page = PagedResult::new(vec![1, 2], 7, &params);
        let mapped = page.map(|n| n.to_string());

        assert_eq!(mapped.results, vec!["1".to_string(), "2".to_string()]);
        assert_eq!(mapped.page, 1);
        assert_eq!(mapped.page_size, 2);
        assert_eq!(mapped.total_count, 7);
    }
}
