//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `TripRepository` - Write side of the trip aggregate
//! - `TripReader` - Aggregate loader (trip + references + ordered paths)
//!
//! ## Outbound Ports
//!
//! - `TripDocumentRenderer` - External document template service

mod trip_document_renderer;
mod trip_reader;
mod trip_repository;

pub use trip_document_renderer::{TemplateError, TripDocumentRenderer};
pub use trip_reader::TripReader;
pub use trip_repository::TripRepository;
