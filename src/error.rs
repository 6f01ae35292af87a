// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
//! Error types for the uhpc_core library.
//!
//! The prediction engines themselves never fail; these errors come from the
//! checked boundaries (input validation, JSON, config files).

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A material quantity is negative or not a finite number
    #[error("invalid quantity for {field}: {value} (must be finite and >= 0)")]
    InvalidQuantity { field: &'static str, value: f64 },

    /// Curing age rejected by the model it was passed to
    #[error("invalid curing age: {0} days")]
    InvalidAge(f64),

    /// Input outside the documented dashboard range
    #[error("{field} = {value} outside range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Preset name not in the registry
    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
