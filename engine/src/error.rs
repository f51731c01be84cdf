//! Fatal configuration errors.
//!
//! Constraint violations during interaction are never errors — proposed
//! geometry outside bounds is clamped and applied. The only fatal
//! conditions are contract violations in the element configuration itself,
//! rejected at construction.

use thiserror::Error;

/// Invalid board-element configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The minimum size must be strictly positive.
    #[error("minimum size must be strictly positive, got {width}x{height}")]
    NonPositiveMinSize { width: f64, height: f64 },
    /// Grid increments must be strictly positive.
    #[error("grid increments must be strictly positive, got {x}x{y}")]
    NonPositiveGrid { x: f64, y: f64 },
}
