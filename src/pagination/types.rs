//! Pagination types and traits
//!
//! Defines the page and request models plus the fetch capability trait
//! that pagers consume.

use crate::error::Result;
use crate::types::Token;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ============================================================================
// Page
// ============================================================================

/// One batch of results plus the raw continuation value, if any
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Records in this page, in the order the endpoint returned them
    pub items: Vec<T>,
    /// Raw continuation value from the response: an opaque token, a
    /// stringified offset, or a full next-page URL. Absent on the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

impl<T> Page<T> {
    /// Create a page with no continuation (a final page)
    pub fn new(items: Vec<T>) -> Self {
        Self { items, next: None }
    }

    /// Set the raw continuation value
    #[must_use]
    pub fn with_next(mut self, next: impl Into<String>) -> Self {
        self.next = Some(next.into());
        self
    }

    /// True if the endpoint signalled no further pages
    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}

// ============================================================================
// PageRequest
// ============================================================================

/// The parameter set for a single list call
///
/// `filters` holds the caller-fixed filter, sort, and limit parameters;
/// `cursor` is the continuation slot a pager owns exclusively. Filters are
/// flattened on serialization so a transport can map a request directly onto
/// query parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRequest<F> {
    /// Caller-fixed filter parameters, immutable for the life of a pager
    #[serde(flatten)]
    pub filters: F,
    /// Continuation cursor for the next page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<Token>,
}

impl<F> PageRequest<F> {
    /// Create a request with no cursor
    pub fn new(filters: F) -> Self {
        Self {
            filters,
            cursor: None,
        }
    }

    /// Set the cursor
    #[must_use]
    pub fn with_cursor(mut self, cursor: impl Into<Token>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// True if a cursor is present
    pub fn has_cursor(&self) -> bool {
        self.cursor.is_some()
    }
}

// ============================================================================
// PageFetch
// ============================================================================

/// The page-fetch capability a pager consumes
///
/// Implemented by the transport layer (a service client, an HTTP adapter, a
/// test double). One call fetches one page; the pager never issues a second
/// fetch before the first resolves.
#[async_trait]
pub trait PageFetch: Send + Sync {
    /// Item type produced by the list operation
    type Item: Send;
    /// Caller-fixed filter parameters fixed at pager construction
    type Filters: Clone + Send + Sync;

    /// Fetch a single page for the given request
    async fn fetch_page(&self, request: &PageRequest<Self::Filters>)
        -> Result<Page<Self::Item>>;
}

// A single service client is commonly shared by several pagers, one per list
// operation. A shared handle fetches through the same capability.
#[async_trait]
impl<C: PageFetch + ?Sized> PageFetch for Arc<C> {
    type Item = C::Item;
    type Filters = C::Filters;

    async fn fetch_page(
        &self,
        request: &PageRequest<Self::Filters>,
    ) -> Result<Page<Self::Item>> {
        (**self).fetch_page(request).await
    }
}
