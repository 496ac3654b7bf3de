//! Outbound notification gateway for the travel platform.
//!
//! Currently a single channel: booking confirmation emails over SMTP.
//! Delivery is strictly best-effort; callers spawn a detached task and
//! never couple their own success to the outcome here.

pub mod email;

pub use email::{BookingConfirmation, EmailConfig, EmailDelivery, EmailError};
