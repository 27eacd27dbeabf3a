// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::unused_self)]

//! # pagekit
//!
//! Page-number pagination for APIs and listings.
//!
//! ## Features
//!
//! - **Paginator**: page count, previous/next, item boundaries from `(page, page_size, total)`
//! - **Navigation sequence**: compact `1 2 … 7 8 9 … 19 20` page lists with gap markers
//! - **Paginable trait**: all derived values for any type that knows its page, size and total
//! - **Response envelope**: `{data, page, page_size, total, next_page, previous_page}`
//!   with links built from the current request URL
//! - **Configuration**: window defaults, parameter names and page size limits from YAML/JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use pagekit::{PageEnvelope, PageLinks, Paginable, Paginator};
//!
//! # fn main() -> pagekit::Result<()> {
//! let pager = Paginator::new(2, 10, 95)?;
//! assert_eq!(pager.pages(), 10);
//! assert_eq!((pager.page_start(), pager.page_end()), (11, 20));
//!
//! let nav: Vec<String> = pager.iter_pages().map(|m| m.to_string()).collect();
//! assert_eq!(nav.join(" "), "1 2 3 4 5 6 … 9 10");
//!
//! let links = PageLinks::parse("https://api.example.com/items?page=2", "page")?;
//! let envelope = PageEnvelope::new(vec!["k", "l"], &pager, &links);
//! assert_eq!(
//!     envelope.next_page.as_deref(),
//!     Some("https://api.example.com/items?page=3")
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                             CLI                              │
//! │        info      pages      envelope      config             │
//! └──────────────────────────────────────────────────────────────┘
//!                                │
//! ┌───────────────┬──────────────┴───────────┬──────────────────┐
//! │  Pagination   │        Envelope          │     Config       │
//! ├───────────────┼──────────────────────────┼──────────────────┤
//! │ Paginator     │ PageQuery                │ PagerConfig      │
//! │ Paginable     │ PageLinks                │ YAML / JSON      │
//! │ PageWindow    │ PageEnvelope             │ validation       │
//! │ IterPages     │                          │                  │
//! └───────────────┴──────────────────────────┴──────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// Page model and navigation sequence
pub mod pagination;

/// Request parameters, links and response envelope
pub mod envelope;

/// Pager configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use config::{load_config, load_config_from_str, PagerConfig};
pub use envelope::{PageEnvelope, PageLinks, PageQuery};
pub use pagination::{IterPages, PageMarker, PageSummary, PageWindow, Paginable, Paginator};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
