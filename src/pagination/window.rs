//! Page navigation window
//!
//! Produces the compact page-number sequence used by pager controls:
//! a few pages at each edge, a window around the current page, and gap
//! markers wherever numbers were skipped.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::FusedIterator;

/// One element of a navigation sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<u64>", into = "Option<u64>")]
pub enum PageMarker {
    /// A page number to link to
    Page(u64),
    /// Elided pages, rendered as an ellipsis
    Gap,
}

impl PageMarker {
    /// Check if this is a gap marker
    pub fn is_gap(&self) -> bool {
        matches!(self, Self::Gap)
    }

    /// The page number, if this is not a gap
    pub fn page(&self) -> Option<u64> {
        match self {
            Self::Page(num) => Some(*num),
            Self::Gap => None,
        }
    }
}

impl From<Option<u64>> for PageMarker {
    fn from(value: Option<u64>) -> Self {
        value.map_or(Self::Gap, Self::Page)
    }
}

impl From<PageMarker> for Option<u64> {
    fn from(marker: PageMarker) -> Self {
        marker.page()
    }
}

impl fmt::Display for PageMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(num) => write!(f, "{num}"),
            Self::Gap => f.write_str("…"),
        }
    }
}

/// Which page numbers a navigation sequence shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageWindow {
    /// Pages always shown at the start
    pub left_edge: u64,
    /// Pages shown before the current one
    pub left_current: u64,
    /// Bound of the pages shown after the current one (exclusive)
    pub right_current: u64,
    /// Pages always shown at the end
    pub right_edge: u64,
}

impl Default for PageWindow {
    fn default() -> Self {
        Self {
            left_edge: 2,
            left_current: 2,
            right_current: 5,
            right_edge: 2,
        }
    }
}

impl PageWindow {
    /// Create a window from all four parameters
    pub fn new(left_edge: u64, left_current: u64, right_current: u64, right_edge: u64) -> Self {
        Self {
            left_edge,
            left_current,
            right_current,
            right_edge,
        }
    }

    /// Set both edge widths
    #[must_use]
    pub fn with_edges(mut self, left: u64, right: u64) -> Self {
        self.left_edge = left;
        self.right_edge = right;
        self
    }

    /// Set the span around the current page
    #[must_use]
    pub fn with_current(mut self, left: u64, right: u64) -> Self {
        self.left_current = left;
        self.right_current = right;
        self
    }

    /// Whether `num` is shown when `page` of `pages` is current.
    ///
    /// Shown pages satisfy `num <= left_edge`, or
    /// `page - left_current - 1 < num < page + right_current`, or
    /// `num > pages - right_edge`, where a subtraction going below zero
    /// makes its bound vacuous.
    pub fn includes(&self, num: u64, page: u64, pages: u64) -> bool {
        let left_edge = num <= self.left_edge;
        let around_current = num >= page.saturating_sub(self.left_current)
            && num < page.saturating_add(self.right_current);
        let right_edge = num > pages.saturating_sub(self.right_edge);
        left_edge || around_current || right_edge
    }
}

/// Lazy navigation sequence, see [`Paginable::iter_pages`](super::Paginable::iter_pages)
#[derive(Debug, Clone)]
pub struct IterPages {
    page: u64,
    pages: u64,
    window: PageWindow,
    /// Smallest page number not examined yet, `None` once exhausted
    cursor: Option<u64>,
    last: u64,
    pending: Option<u64>,
}

impl IterPages {
    pub(crate) fn new(page: u64, pages: u64, window: PageWindow) -> Self {
        Self {
            page,
            pages,
            window,
            cursor: Some(1),
            last: 0,
            pending: None,
        }
    }

    /// Smallest shown page number that is `>= from`.
    ///
    /// Each of the three shown ranges is contiguous, so this jumps straight
    /// to the answer instead of testing every number in between.
    fn next_shown(&self, from: u64) -> Option<u64> {
        if from > self.pages {
            return None;
        }
        if from <= self.window.left_edge {
            return Some(from);
        }

        let around_start = from.max(self.page.saturating_sub(self.window.left_current));
        let around_end = self.page.saturating_add(self.window.right_current);
        let around = (around_start < around_end).then_some(around_start);

        let right = self
            .pages
            .saturating_sub(self.window.right_edge)
            .checked_add(1)
            .map(|start| start.max(from));

        [around, right]
            .into_iter()
            .flatten()
            .filter(|&num| num <= self.pages)
            .min()
    }
}

impl Iterator for IterPages {
    type Item = PageMarker;

    fn next(&mut self) -> Option<PageMarker> {
        // A gap was just emitted; the page that caused it comes next
        if let Some(num) = self.pending.take() {
            self.last = num;
            return Some(PageMarker::Page(num));
        }

        let Some(num) = self.cursor.and_then(|from| self.next_shown(from)) else {
            self.cursor = None;
            return None;
        };
        debug_assert!(self.window.includes(num, self.page, self.pages));
        self.cursor = num.checked_add(1);

        if self.last + 1 == num {
            self.last = num;
            Some(PageMarker::Page(num))
        } else {
            self.pending = Some(num);
            Some(PageMarker::Gap)
        }
    }
}

impl FusedIterator for IterPages {}
