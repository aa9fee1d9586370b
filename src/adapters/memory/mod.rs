//! In-memory adapters for tests and local development.

mod in_memory_trip_store;

pub use in_memory_trip_store::InMemoryTripStore;
