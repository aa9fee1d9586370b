//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod trip;

pub use trip::{
    CreateTripCommand, CreateTripHandler, DeleteTripCommand, DeleteTripHandler,
    ExportTripHandler, ExportTripQuery, GetTripHandler, GetTripQuery, ListTripsHandler,
    UpdateTripCommand, UpdateTripHandler,
};
