//! Pagination types

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// A request for one window of results
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageRequest {
    /// Page index (0-based)
    page: u32,

    /// Items per page (at least 1)
    size: u32,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Result<Self, ValidationError> {
        if size == 0 {
            return Err(ValidationError::InvalidPageSize);
        }
        Ok(Self { page, size })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Number of items preceding this page
    pub fn offset(&self) -> usize {
        (self.page as usize).saturating_mul(self.size as usize)
    }
}

/// A bounded, ordered result window with pagination metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,

    /// Current page index (0-based)
    pub page: u32,

    pub size: u32,

    pub total_items: u64,

    pub total_pages: u32,
}

impl<T> Page<T> {
    /// Cut one page out of an already filtered sequence
    pub fn from_matches<I>(matches: I, request: PageRequest) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut total_items: u64 = 0;
        let offset = request.offset();
        let mut items = Vec::new();

        for (index, item) in matches.into_iter().enumerate() {
            total_items += 1;
            if index >= offset && items.len() < request.size as usize {
                items.push(item);
            }
        }

        Self {
            items,
            page: request.page,
            size: request.size,
            total_items,
            total_pages: total_pages(total_items, request.size),
        }
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}

fn total_pages(total_items: u64, size: u32) -> u32 {
    total_items.div_ceil(size as u64) as u32
}
