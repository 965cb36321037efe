//! Core components of the `nse-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`NseClient`] and its builder.
//! - The primary [`NseError`] type and its [`ErrorKind`] tiers.
//! - Date range validation and provider date normalization.
//! - Internal networking and lenient payload decoding.

/// The main client (`NseClient`), builder, and configuration.
pub mod client;
/// Date range validation and canonical date handling.
pub mod dates;
/// The primary error type (`NseError`) for the crate.
pub mod error;
pub(crate) mod historical;
/// Shared data models used across multiple datasets.
pub mod models;
pub(crate) mod net;
pub(crate) mod wire;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

// convenient re-exports so most code can just `use crate::core::NseClient`
pub use client::{NseClient, NseClientBuilder};
pub use dates::DateRange;
pub use error::{ErrorKind, NseError};
pub use models::SecurityFlags;

/// Rejects empty symbol or index names before any request is made.
pub(crate) fn require_name(what: &str, value: &str) -> Result<String, NseError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(NseError::InvalidArgument(format!("{what} must not be empty")));
    }
    Ok(trimmed.to_string())
}
