//! Booking confirmation emails via SMTP.
//!
//! [`EmailDelivery`] wraps the `lettre` async SMTP transport to send
//! plain-text confirmation emails when a booking is created. Configuration
//! is loaded from environment variables; if `SMTP_HOST` is not set,
//! [`EmailConfig::from_env`] returns `None` and no mailer should be
//! constructed.

use geleza_core::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The recipient or sender address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

// ---------------------------------------------------------------------------
// EmailConfig
// ---------------------------------------------------------------------------

/// Default SMTP port (STARTTLS).
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender address when `SMTP_FROM` is not set.
const DEFAULT_FROM_ADDRESS: &str = "bookings@geleza.app";

/// Configuration for the SMTP email delivery service.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port (defaults to 587).
    pub smtp_port: u16,
    /// RFC 5322 "From" address.
    pub from_address: String,
    /// Optional SMTP username.
    pub smtp_user: Option<String>,
    /// Optional SMTP password.
    pub smtp_password: Option<String>,
}

impl EmailConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `SMTP_HOST` is not set, signalling that email
    /// delivery is not configured and should be skipped.
    ///
    /// | Variable        | Required | Default              |
    /// |-----------------|----------|----------------------|
    /// | `SMTP_HOST`     | yes      | -                    |
    /// | `SMTP_PORT`     | no       | `587`                |
    /// | `SMTP_FROM`     | no       | `bookings@geleza.app` |
    /// | `SMTP_USER`     | no       | -                    |
    /// | `SMTP_PASSWORD` | no       | -                    |
    pub fn from_env() -> Option<Self> {
        let smtp_host = std::env::var("SMTP_HOST").ok()?;
        Some(Self {
            smtp_host,
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            from_address: std::env::var("SMTP_FROM")
                .unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string()),
            smtp_user: std::env::var("SMTP_USER").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
        })
    }
}

// ---------------------------------------------------------------------------
// BookingConfirmation
// ---------------------------------------------------------------------------

/// The booking details carried in a confirmation email.
#[derive(Debug, Clone)]
pub struct BookingConfirmation {
    pub booking_id: DbId,
    pub full_name: String,
    /// Absent if the package row could not be joined.
    pub package_title: Option<String>,
    pub departure_date: String,
    pub return_date: String,
    pub travelers: i32,
    pub created_at: Timestamp,
}

impl BookingConfirmation {
    /// Render the plain-text email body.
    fn body(&self) -> String {
        let package = self.package_title.as_deref().unwrap_or("your selected package");
        format!(
            "Dear {name},\n\n\
             Thank you for booking with us. Your reservation has been received.\n\n\
             Booking reference: #{id}\n\
             Package: {package}\n\
             Departure: {departure}\n\
             Return: {ret}\n\
             Travelers: {travelers}\n\
             Booked at: {created}\n\n\
             Our team will be in touch to confirm your trip.\n",
            name = self.full_name,
            id = self.booking_id,
            package = package,
            departure = self.departure_date,
            ret = self.return_date,
            travelers = self.travelers,
            created = self.created_at.format("%Y-%m-%d %H:%M UTC"),
        )
    }
}

// ---------------------------------------------------------------------------
// EmailDelivery
// ---------------------------------------------------------------------------

/// Sends booking confirmation emails via SMTP.
pub struct EmailDelivery {
    config: EmailConfig,
}

impl EmailDelivery {
    /// Create a new email delivery service with the given configuration.
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// Send a confirmation email for a newly created booking.
    ///
    /// One delivery attempt, no retries. Callers must not let a failure
    /// here affect the outcome of the booking creation that triggered it.
    pub async fn send_booking_confirmation(
        &self,
        to_email: &str,
        confirmation: &BookingConfirmation,
    ) -> Result<(), EmailError> {
        use lettre::{
            message::header::ContentType, transport::smtp::authentication::Credentials,
            AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
        };

        let email = Message::builder()
            .from(self.config.from_address.parse()?)
            .to(to_email.parse()?)
            .subject("Your Booking Confirmation")
            .header(ContentType::TEXT_PLAIN)
            .body(confirmation.body())
            .map_err(|e| EmailError::Build(e.to_string()))?;

        let mut transport_builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.smtp_host)?
                .port(self.config.smtp_port);

        if let (Some(user), Some(pass)) = (&self.config.smtp_user, &self.config.smtp_password) {
            transport_builder =
                transport_builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        let mailer = transport_builder.build();
        mailer.send(email).await?;

        tracing::info!(
            to = to_email,
            booking_id = confirmation.booking_id,
            "Booking confirmation email sent"
        );
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
