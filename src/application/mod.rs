//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers go through `TripRepository`, query handlers through
//! `TripReader`.

pub mod handlers;

pub use handlers::{
    CreateTripCommand, CreateTripHandler, DeleteTripCommand, DeleteTripHandler,
    ExportTripHandler, ExportTripQuery, GetTripHandler, GetTripQuery, ListTripsHandler,
    UpdateTripCommand, UpdateTripHandler,
};
