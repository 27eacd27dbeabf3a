//! Response envelope module
//!
//! Shapes a page of data for API responses.
//!
//! # Overview
//!
//! - [`PageQuery`] reads the page and page size a request asked for and
//!   turns them into a [`Paginator`](crate::pagination::Paginator) using the
//!   configured defaults and limits.
//! - [`PageLinks`] builds absolute next/previous URLs by rewriting the page
//!   parameter of the current request URL.
//! - [`PageEnvelope`] wraps the data with its pagination metadata:
//!
//! ```json
//! {
//!   "data": [...],
//!   "page": 2,
//!   "page_size": 20,
//!   "total": 95,
//!   "next_page": "https://api.example.com/items?page=3",
//!   "previous_page": "https://api.example.com/items?page=1"
//! }
//! ```

mod links;
mod query;
mod types;

pub use links::PageLinks;
pub use query::PageQuery;
pub use types::PageEnvelope;
