use std::sync::Arc;

use geleza_events::EmailDelivery;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: geleza_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Outbound email gateway; `None` when SMTP is not configured, in which
    /// case confirmation emails are skipped (and logged as skipped).
    pub mailer: Option<Arc<EmailDelivery>>,
}
