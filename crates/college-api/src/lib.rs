//! college-api: HTTP surface for college-info.
//!
//! Every route is a thin caller of [`college_core::Catalog`]: it validates the
//! request, runs the catalog lookup or query, and wraps the payload in the
//! uniform [`Envelope`].

pub mod envelope;
pub mod error;
pub mod handlers;
pub mod params;
pub mod router;
pub mod views;

pub use envelope::Envelope;
pub use error::ApiError;
pub use router::{router, AppState, COLLEGES_PATH};
