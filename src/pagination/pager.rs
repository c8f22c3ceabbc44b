//! The generic pager state machine
//!
//! A [`Pager`] wraps one list operation and one fixed filter set, and walks
//! the operation's pages strictly in sequence: the cursor for page N+1 is
//! only known once page N has resolved.

use super::strategies::TokenExtractor;
use super::types::{PageFetch, PageRequest};
use crate::error::{Error, Result};
use crate::types::{OptionStringExt, Token};
use tracing::debug;

/// A stateful iterator over a paginated list operation
///
/// Constructed bound to one fetch capability, one filter set, and one token
/// extraction strategy. Mutated only by its own `get_next` calls; once
/// exhausted it stays exhausted — restarting means constructing a new pager
/// with the same filters.
///
/// A pager is single-consumer: `get_next` takes `&mut self`, so two callers
/// cannot drive one instance without external synchronization.
pub struct Pager<C: PageFetch> {
    fetcher: C,
    extractor: Box<dyn TokenExtractor>,
    /// Base request snapshot taken at construction; its cursor slot stays
    /// empty, the live cursor is merged in per call.
    request: PageRequest<C::Filters>,
    cursor: Option<Token>,
    has_next: bool,
    pages_fetched: u32,
    items_fetched: u64,
}

impl<C: PageFetch> std::fmt::Debug for Pager<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pager")
            .field("has_next", &self.has_next)
            .field("pages_fetched", &self.pages_fetched)
            .field("items_fetched", &self.items_fetched)
            .finish()
    }
}

impl<C: PageFetch> Pager<C> {
    /// Create a pager over the given fetch capability and filter set
    ///
    /// Fails with [`Error::CursorPreset`] if the request already carries a
    /// cursor: the pager owns cursor state exclusively, and an externally
    /// primed cursor would leave the origin of the first page ambiguous.
    pub fn new(
        fetcher: C,
        request: PageRequest<C::Filters>,
        extractor: Box<dyn TokenExtractor>,
    ) -> Result<Self> {
        if request.has_cursor() {
            return Err(Error::CursorPreset);
        }

        Ok(Self {
            fetcher,
            extractor,
            request,
            cursor: None,
            has_next: true,
            pages_fetched: 0,
            items_fetched: 0,
        })
    }

    /// True if there are potentially more results to be retrieved by
    /// invoking `get_next`
    pub fn has_next(&self) -> bool {
        self.has_next
    }

    /// Number of pages fetched so far
    pub fn pages_fetched(&self) -> u32 {
        self.pages_fetched
    }

    /// Number of items fetched so far
    pub fn items_fetched(&self) -> u64 {
        self.items_fetched
    }

    /// Fetch the next page of results
    ///
    /// Fails with [`Error::Exhausted`] once `has_next` is false; no fetch is
    /// issued in that case. Any fetch or extraction error propagates
    /// unchanged and leaves the cursor and `has_next` untouched, so a retry
    /// re-issues the same request.
    ///
    /// An empty item list is a valid result while `has_next` stays true; the
    /// endpoint decides when pagination ends, via the continuation value.
    pub async fn get_next(&mut self) -> Result<Vec<C::Item>> {
        if !self.has_next {
            return Err(Error::Exhausted);
        }

        let mut request = self.request.clone();
        request.cursor = self.cursor.clone();

        let page = self.fetcher.fetch_page(&request).await?;

        let token = match page.next.as_deref() {
            Some(raw) => self.extractor.extract(raw)?,
            None => None,
        };

        // An empty token ends pagination the same as an absent one.
        self.cursor = token.none_if_empty();
        self.has_next = self.cursor.is_some();
        self.pages_fetched += 1;
        self.items_fetched += page.items.len() as u64;

        debug!(
            "page {}: fetched {} items, has_next={}",
            self.pages_fetched,
            page.items.len(),
            self.has_next
        );

        Ok(page.items)
    }

    /// Fetch all remaining pages and return the combined items
    ///
    /// Items are accumulated in page order with intra-page order preserved.
    /// The first `get_next` failure propagates and discards items already
    /// accumulated within this call; pager state is whatever the successful
    /// calls left behind, so the drain can be resumed. Called after
    /// exhaustion, returns an empty `Vec` without fetching.
    pub async fn get_all(&mut self) -> Result<Vec<C::Item>> {
        let mut results = Vec::new();
        while self.has_next() {
            let page = self.get_next().await?;
            results.extend(page);
        }
        Ok(results)
    }
}
