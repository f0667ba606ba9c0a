//! Construction-time contract violations.

use thiserror::Error;

pub type ContractResult<T> = Result<T, ContractError>;

/// A value that breaks a construction contract. These are programming or
/// configuration errors: they are reported when an object is built and are
/// never clamped into range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContractError {
    #[error("aerodrome bounds are malformed: left={left}, right={right}, bottom={bottom}, top={top}")]
    InvalidBounds {
        left: f64,
        top: f64,
        right: f64,
        bottom: f64,
    },
    #[error("{what} must be finite, got {value}")]
    NotFinite { what: &'static str, value: f64 },
    #[error("radius must be non-negative, got {0}")]
    NegativeRadius(f64),
    #[error("aperture angle must lie within [0, 2π], got {0}")]
    ApertureOutOfRange(f64),
    #[error("speed range [{min}, {max}] is invalid")]
    InvalidSpeedRange { min: f64, max: f64 },
    #[error("tick period must be greater than zero")]
    ZeroTickPeriod,
    #[error("spawn delay and jitter cannot both be zero")]
    ZeroSpawnInterval,
    #[error("speed must be non-negative, got {0}")]
    NegativeSpeed(f64),
    #[error("selection margin must be positive, got {0}")]
    InvalidSelectionMargin(f64),
    #[error("at least one landing site is required")]
    NoLandingSites,
}

/// Reject NaN and infinities for a named quantity.
pub fn ensure_finite(what: &'static str, value: f64) -> ContractResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ContractError::NotFinite { what, value })
    }
}
