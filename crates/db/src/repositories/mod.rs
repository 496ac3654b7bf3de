//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod booking_repo;
pub mod category_repo;
pub mod destination_repo;
pub mod itinerary_repo;
pub mod package_item_repo;
pub mod package_repo;
pub mod review_repo;
pub mod stats_repo;

pub use booking_repo::BookingRepo;
pub use category_repo::CategoryRepo;
pub use destination_repo::DestinationRepo;
pub use itinerary_repo::ItineraryRepo;
pub use package_item_repo::PackageItemRepo;
pub use package_repo::PackageRepo;
pub use review_repo::ReviewRepo;
pub use stats_repo::StatsRepo;
