//! Pagination types and traits
//!
//! Defines the [`Paginable`] capability and the concrete [`Paginator`].

use super::window::{IterPages, PageWindow};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Anything that knows its current page, page size and total item count.
///
/// Only the three accessors are required; every derived value is a default
/// method. A `page_size` of 0 means the result set is not paginated and
/// fits on a single page.
pub trait Paginable {
    /// Current page, 1-based
    fn page(&self) -> u64;

    /// Items per page, 0 for unbounded
    fn page_size(&self) -> u64;

    /// Total items across all pages
    fn total(&self) -> u64;

    /// True when the result set is not paginated
    fn is_unbounded(&self) -> bool {
        self.page_size() == 0
    }

    /// Number of pages, never less than 1
    fn pages(&self) -> u64 {
        if self.is_unbounded() {
            return 1;
        }
        self.total().div_ceil(self.page_size()).max(1)
    }

    /// Whether a page exists before the current one
    fn has_prev(&self) -> bool {
        self.page() > 1
    }

    /// Whether a page exists after the current one
    fn has_next(&self) -> bool {
        self.page() < self.pages()
    }

    /// 1-based index of the first item on the current page
    fn page_start(&self) -> u64 {
        if self.is_unbounded() {
            return 1;
        }
        self.page()
            .saturating_sub(1)
            .saturating_mul(self.page_size())
            .saturating_add(1)
    }

    /// 1-based index of the last item on the current page.
    ///
    /// An unbounded page holds every item, so this is `total`.
    fn page_end(&self) -> u64 {
        if self.is_unbounded() {
            return self.total();
        }
        self.total().min(self.page_size().saturating_mul(self.page()))
    }

    /// Number of items to skip to reach the current page
    fn offset(&self) -> u64 {
        self.page_start() - 1
    }

    /// Navigation sequence using the default window
    fn iter_pages(&self) -> IterPages {
        self.iter_pages_with(PageWindow::default())
    }

    /// Navigation sequence using a custom window
    fn iter_pages_with(&self, window: PageWindow) -> IterPages {
        IterPages::new(self.page(), self.pages(), window)
    }

    /// Snapshot of the stored and derived values
    fn summary(&self) -> PageSummary {
        PageSummary {
            page: self.page(),
            page_size: self.page_size(),
            total: self.total(),
            pages: self.pages(),
            has_prev: self.has_prev(),
            has_next: self.has_next(),
            page_start: self.page_start(),
            page_end: self.page_end(),
        }
    }
}

/// A single page out of a larger result set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Paginator {
    page: u64,
    page_size: u64,
    total: u64,
}

impl Paginator {
    /// Create a paginator.
    ///
    /// Fails with [`Error::InvalidArgument`] when `page` is 0. A page past
    /// the last one is accepted; `has_next` and the boundaries report it.
    pub fn new(page: u64, page_size: u64, total: u64) -> Result<Self> {
        if page == 0 {
            return Err(Error::invalid_argument("page", "pages are numbered from 1"));
        }
        Ok(Self {
            page,
            page_size,
            total,
        })
    }

    /// Single unpaginated page holding all `total` items
    pub fn unbounded(total: u64) -> Self {
        Self {
            page: 1,
            page_size: 0,
            total,
        }
    }
}

impl Paginable for Paginator {
    fn page(&self) -> u64 {
        self.page
    }

    fn page_size(&self) -> u64 {
        self.page_size
    }

    fn total(&self) -> u64 {
        self.total
    }
}

/// Serializable view of a [`Paginable`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSummary {
    pub page: u64,
    pub page_size: u64,
    pub total: u64,
    pub pages: u64,
    pub has_prev: bool,
    pub has_next: bool,
    pub page_start: u64,
    pub page_end: u64,
}
