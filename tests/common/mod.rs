//! Shared test utilities for college-info integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file.

#![allow(dead_code, unused_imports)]

pub mod assertions;
pub mod builders;
pub mod fixtures;
pub mod http;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
pub use http::*;
