//! Offset pagination over an already-fetched feed.

use std::ops::Range;

/// Posts per page on the home feed.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One page of a feed plus paging metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedPage<T> {
    /// Items on this page (at most `page_size`)
    pub items: Vec<T>,

    /// The requested page, echoed back unchanged
    pub current_page: u32,

    /// Number of non-empty pages available
    pub total_pages: u32,
}

/// Fixed-size offset paginator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
}

impl Paginator {
    /// Create a paginator. A page size of 0 is treated as 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    /// Number of pages needed for `len` items. Exact multiples do not add
    /// an extra empty page, and zero items means zero pages.
    pub fn total_pages(&self, len: usize) -> u32 {
        u32::try_from(len.div_ceil(self.page_size)).unwrap_or(u32::MAX)
    }

    /// Index range of `page` within a sequence of `len` items.
    ///
    /// The range is always within `0..=len`; page 0 and pages past the end
    /// produce an empty range.
    pub fn page_range(&self, len: usize, page: u32) -> Range<usize> {
        if page == 0 {
            return 0..0;
        }

        let start = (page as usize - 1)
            .saturating_mul(self.page_size)
            .min(len);
        let end = start.saturating_add(self.page_size).min(len);

        start..end
    }

    /// Slice `items` down to the requested page.
    pub fn paginate<T: Clone>(&self, items: &[T], page: u32) -> FeedPage<T> {
        let range = self.page_range(items.len(), page);

        FeedPage {
            items: items[range].to_vec(),
            current_page: page,
            total_pages: self.total_pages(items.len()),
        }
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
