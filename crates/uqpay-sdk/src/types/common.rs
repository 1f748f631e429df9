/*
[INPUT]:  Pagination parameters and list response envelopes
[OUTPUT]: Validated page requests and generic paginated responses
[POS]:    Data layer - shared list types for every resource
[UPDATE]: When the pagination contract changes
*/

use serde::{Deserialize, Serialize};

use crate::http::{Result, UqpayError};

pub const MIN_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;
pub const MIN_PAGE_NUMBER: u32 = 1;

/// `page_size` (10..=100) and `page_number` (>= 1) for list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page_size: u32,
    pub page_number: u32,
}

impl PageRequest {
    pub fn new(page_size: u32, page_number: u32) -> Self {
        Self {
            page_size,
            page_number,
        }
    }

    /// Out-of-range values are rejected, never clamped
    pub fn validate(&self) -> Result<()> {
        if !(MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(UqpayError::InvalidRequest(format!(
                "page_size must be between {MIN_PAGE_SIZE} and {MAX_PAGE_SIZE}, got {}",
                self.page_size
            )));
        }
        if self.page_number < MIN_PAGE_NUMBER {
            return Err(UqpayError::InvalidRequest(format!(
                "page_number must be at least {MIN_PAGE_NUMBER}, got {}",
                self.page_number
            )));
        }
        Ok(())
    }

    /// The following page
    pub fn next(&self) -> Self {
        Self::new(self.page_size, self.page_number.saturating_add(1))
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(MIN_PAGE_SIZE, MIN_PAGE_NUMBER)
    }
}

/// List response envelope shared by all paginated endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_items: u32,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

impl<T> Paginated<T> {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether a page after `page` exists
    pub fn has_more(&self, page: &PageRequest) -> bool {
        page.page_number < self.total_pages
    }
}
