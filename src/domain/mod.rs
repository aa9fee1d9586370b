//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors)
//! - `trip` - Trip aggregate, path segments, referenced entities
//! - `export` - Sanitizing and formatting a trip for the template service

pub mod export;
pub mod foundation;
pub mod trip;
