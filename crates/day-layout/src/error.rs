//! Error types for schedule input parsing.
//!
//! The layout functions themselves never fail; only turning caller-supplied
//! records into engine inputs can.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid datetime '{value}': {reason}")]
    InvalidDateTime { value: String, reason: String },

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid schedule item: {0}")]
    InvalidInput(String),

    #[error("Invalid schedule JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
