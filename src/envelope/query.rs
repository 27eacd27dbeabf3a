//! Page request parameters

use crate::config::PagerConfig;
use crate::error::{Error, Result};
use crate::pagination::Paginator;
use serde::{Deserialize, Serialize};
use url::Url;

/// Page and page size as requested by a client
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    /// Requested page, 1-based
    #[serde(default)]
    pub page: Option<u64>,
    /// Requested page size, 0 for unbounded
    #[serde(default)]
    pub page_size: Option<u64>,
}

impl PageQuery {
    /// Create a query from explicit values
    pub fn new(page: Option<u64>, page_size: Option<u64>) -> Self {
        Self { page, page_size }
    }

    /// Read the configured page parameters from a request URL.
    ///
    /// When a parameter is repeated the last occurrence wins.
    pub fn from_url(url: &Url, config: &PagerConfig) -> Result<Self> {
        let mut query = Self::default();
        for (key, value) in url.query_pairs() {
            if key == config.page_param {
                query.page = Some(parse_param(&key, &value)?);
            } else if key == config.page_size_param {
                query.page_size = Some(parse_param(&key, &value)?);
            }
        }
        Ok(query)
    }

    /// Replace the fields that are set in `other`
    #[must_use]
    pub fn merge(self, other: PageQuery) -> Self {
        Self {
            page: other.page.or(self.page),
            page_size: other.page_size.or(self.page_size),
        }
    }

    /// Build the paginator for a result set of `total` items.
    ///
    /// Missing values fall back to page 1 and `default_page_size`; the
    /// page size is clamped to `max_page_size`.
    pub fn paginate(&self, total: u64, config: &PagerConfig) -> Result<Paginator> {
        let page = self.page.unwrap_or(1);
        if page == 0 {
            return Err(Error::invalid_argument(
                &config.page_param,
                "pages are numbered from 1",
            ));
        }

        let requested = self.page_size.unwrap_or(config.default_page_size);
        let page_size = config.clamp_page_size(requested);
        if page_size != requested {
            tracing::debug!(requested, page_size, "Clamped page size to configured maximum");
        }

        Paginator::new(page, page_size, total)
    }
}

fn parse_param(key: &str, value: &str) -> Result<u64> {
    value.trim().parse().map_err(|_| {
        Error::invalid_argument(key, format!("expected a non-negative integer, got '{value}'"))
    })
}
