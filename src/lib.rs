//! # pagekit
//!
//! A minimal, Rust-native toolkit for consuming paginated REST APIs.
//! One generic pager instead of a hand-rolled loop per list endpoint.
//!
//! ## Features
//!
//! - **Generic Cursor Pager**: "more pages? / next batch / everything" over
//!   any list operation, with the cursor owned by the pager
//! - **Pluggable Token Extraction**: raw tokens, numeric offsets, and tokens
//!   embedded in next-page URLs
//! - **Transport Agnostic**: the pager consumes a `PageFetch` capability;
//!   bring your own HTTP client, service SDK, or test double
//! - **Retry Friendly**: a failed fetch never corrupts pager state, so the
//!   same page can be re-requested
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pagekit::{Page, PageFetch, PageRequest, Pager, TokenConfig, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // A service client implementing PageFetch for its list operation
//!     let client = CaseClient::new("https://support.example.com");
//!
//!     let request = PageRequest::new(CaseFilters {
//!         status: Some("open".into()),
//!         limit: 25,
//!     });
//!
//!     // Tokens live in the `offset` query parameter of the next link
//!     let mut pager = Pager::new(
//!         client,
//!         request,
//!         TokenConfig::query_param("offset").build(),
//!     )?;
//!
//!     // Page by page...
//!     while pager.has_next() {
//!         for case in pager.get_next().await? {
//!             println!("{case:?}");
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                        Pager                         │
//! │   has_next()      get_next() → Vec<T>      get_all() │
//! └──────────────────────────┬───────────────────────────┘
//!                            │
//!        ┌───────────────────┴────────────────────┐
//!        │  PageFetch (yours)  │  TokenExtractor  │
//!        ├─────────────────────┼──────────────────┤
//!        │  HTTP client        │  RawToken        │
//!        │  Service SDK        │  QueryParamToken │
//!        │  Test double        │                  │
//!        └─────────────────────┴──────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for pagekit
pub mod error;

/// Common types and type aliases
pub mod types;

/// The pager, its request/page models, and token extraction strategies
pub mod pagination;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use pagination::{
    get_query_param, Page, PageFetch, PageRequest, Pager, QueryParamToken, RawToken, TokenConfig,
    TokenExtractor,
};
pub use types::Token;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
