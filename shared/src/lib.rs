//! # Gatehouse Shared
//!
//! Shared configuration and type definitions used across the Gatehouse
//! backend crates. This crate has no business logic of its own; it exists
//! so that the core, infrastructure, and API layers agree on configuration
//! shapes and common response types.

pub mod config;
pub mod types;
pub mod utils;
