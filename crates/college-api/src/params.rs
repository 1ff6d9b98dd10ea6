//! Query-string parameters and their validation.
//!
//! Nothing here reaches the query engine until it has been checked: page and
//! limit bounds, search length, and membership of `type` and `sortBy` in
//! their allowed sets.

use crate::error::ApiError;
use college_core::config::{Config, PageLimits, SearchConfig};
use college_core::{CollegeFilter, CollegeSort, CollegeType, PageRequest};
use serde::Deserialize;

/// Request bounds taken from [`Config`] once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub listing: PageLimits,
    pub news: PageLimits,
    pub search: SearchConfig,
}

impl From<&Config> for Limits {
    fn from(config: &Config) -> Self {
        Self {
            listing: config.listing,
            news: config.news,
            search: config.search,
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::from(&Config::defaults())
    }
}

/// `GET /api/v1/colleges` query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingParams {
    pub search: Option<String>,
    pub state: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

impl ListingParams {
    pub fn validate(self, limits: &Limits) -> Result<(CollegeFilter, PageRequest), ApiError> {
        let search = match self.search {
            Some(raw) => {
                check_search_len(&raw, &limits.search)?;
                Some(raw.trim().to_string())
            }
            None => None,
        };

        let kind = match self.kind.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<CollegeType>().map_err(ApiError::InvalidParameter)?),
        };

        let sort = match self.sort_by.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<CollegeSort>().map_err(ApiError::InvalidParameter)?),
        };

        let page = PageRequest::new(
            self.page.unwrap_or(1),
            self.limit.unwrap_or(limits.listing.default_limit),
            limits.listing.max_limit,
        )?;

        let filter = CollegeFilter {
            search,
            state: exact_match(self.state),
            kind,
            category: exact_match(self.category),
            sort,
        };
        Ok((filter, page))
    }
}

/// `GET /api/v1/colleges/{id}/news` query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsParams {
    pub search: Option<String>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

impl NewsParams {
    pub fn validate(self, limits: &Limits) -> Result<(Option<String>, PageRequest), ApiError> {
        if let Some(raw) = &self.search {
            check_search_len(raw, &limits.search)?;
        }
        let page = PageRequest::new(
            self.page.unwrap_or(1),
            self.limit.unwrap_or(limits.news.default_limit),
            limits.news.max_limit,
        )?;
        Ok((self.search, page))
    }
}

/// An absent or empty value means "no filter". Anything else is trimmed and
/// kept, even when trimming leaves nothing, so whitespace matches no college.
fn exact_match(raw: Option<String>) -> Option<String> {
    raw.filter(|s| !s.is_empty()).map(|s| s.trim().to_string())
}

fn check_search_len(raw: &str, bounds: &SearchConfig) -> Result<(), ApiError> {
    let len = raw.chars().count();
    if len < bounds.min_len || len > bounds.max_len {
        return Err(ApiError::InvalidParameter(format!(
            "search must be between {} and {} characters, got {len}",
            bounds.min_len, bounds.max_len
        )));
    }
    Ok(())
}
