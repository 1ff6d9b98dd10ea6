//! Error types for the catalog and the page-request constructor.
//!
//! The query engine itself has no error type: once a [`PageRequest`] exists,
//! every query produces a well-formed (possibly empty) result.
//!
//! [`PageRequest`]: crate::query::PageRequest

use thiserror::Error;

/// Failure while building a [`Catalog`](crate::Catalog) from its JSON sources.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse dataset `{name}`: {source}")]
    Dataset {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("duplicate college id {0} in dataset")]
    DuplicateId(u32),
}

/// Rejected pagination parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("page must be greater than or equal to 1, got {0}")]
    Page(usize),
    #[error("limit must be between 1 and {max}, got {size}")]
    Size { size: usize, max: usize },
}
