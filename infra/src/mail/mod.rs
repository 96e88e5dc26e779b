//! Mail module - SMTP delivery of verification emails

pub mod mock_mailer;
pub mod smtp_mailer;

pub use mock_mailer::MockMailer;
pub use smtp_mailer::SmtpMailer;
