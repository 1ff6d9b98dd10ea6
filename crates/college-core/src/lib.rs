//! college-core: data model, static catalog and query engine for college-info.
//!
//! # Architecture
//!
//! ```text
//! embedded JSON ──► Catalog ──► query engine ──► QueryResult
//!                     │
//!                     └──► static profile sections
//! ```
//!
//! The catalog is built once at startup and is immutable afterwards, so it can
//! be shared across request tasks behind an `Arc` without locking.

pub mod catalog;
pub mod config;
pub mod error;
pub mod query;
pub mod types;

pub use catalog::{Catalog, CollegeFilter, Section};
pub use error::{CatalogError, PageError};
pub use query::{PageRequest, Predicate, Query, QueryResult, Record, SortKey};
pub use types::{College, CollegeField, CollegeSort, CollegeType, NewsField, NewsItem};
