//! Paginated response envelope

use super::links::PageLinks;
use crate::error::{Error, Result};
use crate::pagination::Paginable;
use crate::types::JsonValue;
use serde::{Deserialize, Serialize};
use url::Url;

/// A page of data with its pagination metadata.
///
/// `next_page` and `previous_page` always serialize, as `null` when there
/// is no such page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEnvelope<T> {
    /// The page data
    pub data: Vec<T>,
    /// The current page
    pub page: u64,
    /// The page size used for pagination
    pub page_size: u64,
    /// The total paginated items
    pub total: u64,
    /// The next page URL if it exists
    pub next_page: Option<String>,
    /// The previous page URL if it exists
    pub previous_page: Option<String>,
}

impl<T> PageEnvelope<T> {
    /// Wrap `data` with the metadata of `pager` and links built from `links`
    pub fn new<P: Paginable + ?Sized>(data: Vec<T>, pager: &P, links: &PageLinks) -> Self {
        Self {
            next_page: links.next(pager).map(String::from),
            previous_page: links.previous(pager).map(String::from),
            ..Self::without_links(data, pager)
        }
    }

    /// Wrap `data` without navigation links
    pub fn without_links<P: Paginable + ?Sized>(data: Vec<T>, pager: &P) -> Self {
        Self {
            data,
            page: pager.page(),
            page_size: pager.page_size(),
            total: pager.total(),
            next_page: None,
            previous_page: None,
        }
    }

    /// Transform the data, keeping the metadata
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> PageEnvelope<U> {
        PageEnvelope {
            data: self.data.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total: self.total,
            next_page: self.next_page,
            previous_page: self.previous_page,
        }
    }

    /// Check the envelope contract on a received envelope.
    ///
    /// `page` must be positive and links must be absolute URLs (never empty).
    pub fn validate(&self) -> Result<()> {
        if self.page == 0 {
            return Err(Error::invalid_argument("page", "pages are numbered from 1"));
        }
        for (field, link) in [
            ("next_page", &self.next_page),
            ("previous_page", &self.previous_page),
        ] {
            if let Some(link) = link {
                Url::parse(link).map_err(|e| {
                    Error::invalid_argument(field, format!("'{link}' is not an absolute URL: {e}"))
                })?;
            }
        }
        Ok(())
    }
}

impl<T: Serialize> PageEnvelope<T> {
    /// Serialize to a JSON value
    pub fn to_json(&self) -> Result<JsonValue> {
        Ok(serde_json::to_value(self)?)
    }
}

impl<T> Paginable for PageEnvelope<T> {
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
