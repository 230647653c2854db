//! Shared types for the roster service.
//!
//! Holds the identifier type and the domain error taxonomy used by both the
//! data access crate and the HTTP layer.

pub mod error;
pub mod types;
