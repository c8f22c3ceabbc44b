//! Token extraction strategy implementations
//!
//! Endpoints disagree about where the continuation token lives: some return
//! it as a bare field, some bury it in a query parameter of a "next page"
//! URL. Each strategy turns the raw continuation value of a [`Page`] into
//! the token for the following request.
//!
//! [`Page`]: super::Page

use crate::error::Result;
use crate::types::Token;
use serde::{Deserialize, Serialize};
use url::Url;

// ============================================================================
// TokenExtractor
// ============================================================================

/// Core trait for token extraction strategies
pub trait TokenExtractor: Send + Sync {
    /// Derive the next-request token from a page's raw continuation value
    ///
    /// Returns `Ok(None)` when the value carries no usable token, which a
    /// pager treats as the natural end of pagination.
    fn extract(&self, raw: &str) -> Result<Option<Token>>;
}

// ============================================================================
// Raw Token
// ============================================================================

/// The raw continuation value is the token
///
/// Covers opaque string tokens (e.g. `"next_token": "abc123"`) and numeric
/// offsets carried directly in the response body.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawToken;

impl TokenExtractor for RawToken {
    fn extract(&self, raw: &str) -> Result<Option<Token>> {
        Ok(Some(raw.to_string()))
    }
}

// ============================================================================
// Query Parameter Token
// ============================================================================

/// The continuation value is a next-page URL; the token is one of its query
/// parameters
///
/// Common patterns:
/// - `"next": { "href": "https://host/path?offset=5" }` with param `offset`
/// - `"next_url": "/v2/accounts/a1/users?_start=xyz"` with param `_start`
#[derive(Debug, Clone)]
pub struct QueryParamToken {
    /// Query parameter name holding the token
    pub param: String,
}

impl QueryParamToken {
    /// Create a new query parameter extractor
    pub fn new(param: impl Into<String>) -> Self {
        Self {
            param: param.into(),
        }
    }
}

impl TokenExtractor for QueryParamToken {
    fn extract(&self, raw: &str) -> Result<Option<Token>> {
        get_query_param(raw, &self.param)
    }
}

/// Extract a query parameter value from a URL string
///
/// Returns `Ok(None)` if the parameter is not present. Fails only when the
/// URL itself does not parse.
pub fn get_query_param(url: &str, name: &str) -> Result<Option<String>> {
    let parsed = Url::parse(url)?;
    Ok(parsed
        .query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned()))
}

// ============================================================================
// TokenConfig
// ============================================================================

/// Declarative strategy selection
///
/// Lets configuration-driven callers pick an extraction strategy without
/// naming concrete types.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenConfig {
    /// Use the raw continuation value as-is
    #[default]
    Raw,
    /// Parse the token out of a query parameter of a next-page URL
    QueryParam {
        /// Query parameter name holding the token
        param: String,
    },
}

impl TokenConfig {
    /// Create a query parameter config
    pub fn query_param(param: impl Into<String>) -> Self {
        Self::QueryParam {
            param: param.into(),
        }
    }

    /// Build the configured extractor
    pub fn build(&self) -> Box<dyn TokenExtractor> {
        match self {
            Self::Raw => Box::new(RawToken),
            Self::QueryParam { param } => Box::new(QueryParamToken::new(param.clone())),
        }
    }
}
