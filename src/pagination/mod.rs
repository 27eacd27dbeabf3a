//! Pagination module
//!
//! Page-number pagination over a known total.
//!
//! # Overview
//!
//! A [`Paginator`] is built from three integers (current page, page size,
//! total item count) and derives everything else from them: page count,
//! previous/next availability, item boundaries of the current page, and a
//! compact navigation sequence such as `1 2 … 7 8 9 10 11 … 19 20`.
//!
//! The derived computations live on the [`Paginable`] trait, so any type
//! that knows its page, page size and total gets them for free.
//!
//! ```
//! use pagekit::pagination::{Paginable, PageMarker, Paginator};
//!
//! let pager = Paginator::new(1, 10, 95).unwrap();
//! assert_eq!(pager.pages(), 10);
//! assert!(pager.has_next());
//! assert_eq!(pager.iter_pages().last(), Some(PageMarker::Page(10)));
//! ```

mod types;
mod window;

pub use types::{PageSummary, Paginable, Paginator};
pub use window::{IterPages, PageMarker, PageWindow};
