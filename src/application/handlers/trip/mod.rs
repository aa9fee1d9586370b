//! Trip command and query handlers.

mod create_trip;
mod delete_trip;
mod export_trip;
mod get_trip;
mod list_trips;
mod update_trip;

pub use create_trip::{CreateTripCommand, CreateTripHandler};
pub use delete_trip::{DeleteTripCommand, DeleteTripHandler};
pub use export_trip::{ExportTripHandler, ExportTripQuery};
pub use get_trip::{GetTripHandler, GetTripQuery};
pub use list_trips::ListTripsHandler;
pub use update_trip::{UpdateTripCommand, UpdateTripHandler};
