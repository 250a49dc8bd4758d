//! # Paddock Core
//!
//! Domain types and rules for lesson booking at the riding center: the
//! weekly availability model, slot arithmetic, the store traits the
//! persistence layer implements, and the availability resolver that the
//! booking flow calls when a rider picks a date. Museum rentals and the
//! staff team board ride on the same stores-and-roles pattern.

pub mod booking;
pub mod errors;
pub mod messaging;
pub mod models;
pub mod rentals;
pub mod resolver;
pub mod slots;
pub mod store;
