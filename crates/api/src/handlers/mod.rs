pub mod booking;
pub mod category;
pub mod dashboard;
pub mod destination;
pub mod itinerary;
pub mod package;
pub mod package_item;
pub mod review;
