//! Fundamental geometric types.

use std::f64::consts::{PI, TAU};
use std::fmt;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::config::Bounds;
use crate::error::{ensure_finite, ContractError, ContractResult};

/// 2D position in aerodrome units.
/// x grows to the right, y grows towards the top.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Translate in place by `delta`.
    pub fn add(&mut self, delta: Position) {
        self.x += delta.x;
        self.y += delta.y;
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Unique aircraft identifier. Assigned once at creation and never reused
/// within the process.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AircraftId(pub u32);

impl fmt::Display for AircraftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The playable rectangle. Points on the boundary are inside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Bounds")]
pub struct Aerodrome {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

impl Aerodrome {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> ContractResult<Self> {
        ensure_finite("aerodrome left", left)?;
        ensure_finite("aerodrome top", top)?;
        ensure_finite("aerodrome right", right)?;
        ensure_finite("aerodrome bottom", bottom)?;
        if right <= left || top <= bottom {
            return Err(ContractError::InvalidBounds {
                left,
                top,
                right,
                bottom,
            });
        }
        Ok(Self {
            left,
            top,
            right,
            bottom,
        })
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    /// True iff the position lies strictly outside `[left,right] × [bottom,top]`.
    pub fn is_out_of_bounds(&self, position: &Position) -> bool {
        position.x < self.left
            || position.x > self.right
            || position.y < self.bottom
            || position.y > self.top
    }
}

impl TryFrom<Bounds> for Aerodrome {
    type Error = ContractError;

    fn try_from(bounds: Bounds) -> ContractResult<Self> {
        Self::new(bounds.left, bounds.top, bounds.right, bounds.bottom)
    }
}

impl Default for Aerodrome {
    fn default() -> Self {
        use crate::constants::*;
        Self {
            left: AERODROME_LEFT,
            top: AERODROME_TOP,
            right: AERODROME_RIGHT,
            bottom: AERODROME_BOTTOM,
        }
    }
}

/// Map any angle into `[0, 2π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid rounds tiny negative inputs up to exactly TAU.
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Map any angle into `(-π, π]`.
pub fn wrap_signed(angle: f64) -> f64 {
    let wrapped = normalize_angle(angle);
    if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}
