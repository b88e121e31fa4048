//! Email Module
//!
//! Outbound email via lettre's async SMTP transport. The mailer is an
//! optional service: when SMTP is not configured the server starts without
//! it and forgot-password reports the email system as unavailable.

/// SMTP transport wrapper
pub mod smtp;

pub use smtp::SmtpMailer;
