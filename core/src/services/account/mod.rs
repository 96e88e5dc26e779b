//! Account management: registration, lookup, deletion, email verification.

mod service;

#[cfg(test)]
mod tests;

pub use service::AccountService;
