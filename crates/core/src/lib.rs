//! Domain types, validation, and the error taxonomy shared by the
//! Geleza travel platform backend crates.

pub mod booking;
pub mod error;
pub mod listing;
pub mod types;
