//! Session lifecycle: login, refresh, logout.

mod service;

#[cfg(test)]
mod tests;

pub use service::{AuthService, LogoutOutcome};
