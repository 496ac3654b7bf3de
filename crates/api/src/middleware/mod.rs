//! Request-scoped middleware and extractors.

pub mod identity;

pub use identity::Identity;
