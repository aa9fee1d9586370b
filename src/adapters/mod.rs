//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `apitemplate` - Document template service client
//! - `http` - axum REST surface
//! - `memory` - In-process store for tests and local development
//! - `postgres` - sqlx-backed persistence

pub mod apitemplate;
pub mod http;
pub mod memory;
pub mod postgres;
