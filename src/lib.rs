//! Trip Spark - Travel itinerary service
//!
//! CRUD over trips (a condition, an accommodation and day-ordered path
//! segments) plus export of a trip to an external document template service.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
