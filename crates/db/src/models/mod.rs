//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! NUMERIC columns (prices, ratings) are selected with `::text` casts and
//! carried as `String`, keeping them decimal-safe on the wire.

pub mod booking;
pub mod category;
pub mod destination;
pub mod package;
pub mod package_item;
pub mod review;
pub mod stats;
