//! Next/previous page links

use crate::error::{Error, Result};
use crate::pagination::Paginable;
use url::Url;

/// Builds page URLs from the URL of the current request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLinks {
    base: Url,
    page_param: String,
}

impl PageLinks {
    /// Create links relative to `base`.
    ///
    /// `base` must be a hierarchical URL (`https://...`), not something like
    /// `mailto:` that cannot carry a query string.
    pub fn new(base: Url, page_param: impl Into<String>) -> Result<Self> {
        if base.cannot_be_a_base() {
            return Err(Error::invalid_argument(
                "url",
                format!("'{base}' cannot carry page parameters"),
            ));
        }
        Ok(Self {
            base,
            page_param: page_param.into(),
        })
    }

    /// Parse `url` and create links relative to it
    pub fn parse(url: &str, page_param: impl Into<String>) -> Result<Self> {
        Self::new(Url::parse(url)?, page_param)
    }

    /// URL of the current request
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Name of the page query parameter
    pub fn page_param(&self) -> &str {
        &self.page_param
    }

    /// The request URL with the page parameter set to `page`.
    ///
    /// Other parameters keep their order and every value. Repeated page
    /// parameters collapse into one at the position of the first.
    /// The query is re-encoded as `application/x-www-form-urlencoded`, so
    /// `%20` comes back as `+` and a bare `flag` as `flag=`.
    pub fn for_page(&self, page: u64) -> Url {
        let pairs: Vec<(String, String)> = self.base.query_pairs().into_owned().collect();
        let page_value = page.to_string();

        let mut url = self.base.clone();
        {
            let mut query = url.query_pairs_mut();
            query.clear();

            let mut written = false;
            for (key, value) in &pairs {
                if *key != self.page_param {
                    query.append_pair(key, value);
                } else if !written {
                    query.append_pair(key, &page_value);
                    written = true;
                }
            }
            if !written {
                query.append_pair(&self.page_param, &page_value);
            }
        }

        tracing::trace!(%url, page, "Built page link");
        url
    }

    /// Link to the following page, if there is one
    pub fn next<P: Paginable + ?Sized>(&self, pager: &P) -> Option<Url> {
        pager.has_next().then(|| self.for_page(pager.page() + 1))
    }

    /// Link to the preceding page, if there is one
    pub fn previous<P: Paginable + ?Sized>(&self, pager: &P) -> Option<Url> {
        pager.has_prev().then(|| self.for_page(pager.page() - 1))
    }
}
