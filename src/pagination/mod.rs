//! Pagination module
//!
//! Supports: raw cursor tokens, offset tokens, next-URL embedded tokens
//!
//! # Overview
//!
//! The pagination module presents a paginated listing endpoint as a simple
//! "more pages? / next batch / everything" interface. A [`Pager`] owns the
//! continuation cursor, fetches pages strictly in sequence through a
//! [`PageFetch`] capability, and derives each next cursor with a pluggable
//! [`TokenExtractor`] strategy.

mod pager;
mod strategies;
mod types;

pub use pager::Pager;
pub use strategies::{get_query_param, QueryParamToken, RawToken, TokenConfig, TokenExtractor};
pub use types::{Page, PageFetch, PageRequest};
