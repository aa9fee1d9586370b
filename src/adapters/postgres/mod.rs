//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! This module provides adapters for PostgreSQL-backed persistence:
//! - `PostgresTripRepository` - Trip writes and transactional aggregate delete
//! - `PostgresTripReader` - Snapshot loads of resolved trips

mod trip_reader;
mod trip_repository;
mod trip_rows;

pub use trip_reader::PostgresTripReader;
pub use trip_repository::PostgresTripRepository;
