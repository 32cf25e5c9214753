//! # Fieldbook Core
//!
//! Core domain types for the Fieldbook booking client. It defines the wire
//! models shared with the booking backend, the crate-wide error type, and
//! the slot reconciliation rules that turn raw availability intervals into
//! the fixed hourly booking grid.
//!
//! Everything in this crate is pure and synchronous; network access and
//! fallback policy live in the client crate.

/// Error types used throughout the application
pub mod errors;
/// Wire models shared with the booking backend
pub mod models;
/// The hourly slot catalog and interval reconciliation rules
pub mod slots;
