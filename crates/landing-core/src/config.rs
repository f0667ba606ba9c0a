//! Session configuration.
//!
//! Every geometric and timing parameter of a session is carried here so
//! tests and tools can run alternate geometries. `validate` enforces the
//! construction contracts up front.

use std::f64::consts::TAU;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{AircraftCategory, SiteKind};
use crate::error::{ensure_finite, ContractError, ContractResult};
use crate::types::{Aerodrome, Position};

/// Raw aerodrome boundaries, as written in a config file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            left: AERODROME_LEFT,
            top: AERODROME_TOP,
            right: AERODROME_RIGHT,
            bottom: AERODROME_BOTTOM,
        }
    }
}

/// Where a landing site sits and which headings it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SitePlacement {
    pub kind: SiteKind,
    pub x: f64,
    pub y: f64,
    /// Radians, normalized into `[0, 2π)` when the site is built.
    #[serde(default)]
    pub center_angle: f64,
    /// Radians, `[0, 2π]`. Ignored for helipads.
    #[serde(default = "full_circle")]
    pub aperture_angle: f64,
}

fn full_circle() -> f64 {
    TAU
}

impl SitePlacement {
    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    /// The three sites every default session starts with.
    pub fn defaults() -> Vec<SitePlacement> {
        vec![
            SitePlacement {
                kind: SiteKind::LongRunway,
                x: LONG_RUNWAY_POSITION.0,
                y: LONG_RUNWAY_POSITION.1,
                center_angle: LONG_RUNWAY_CENTER_ANGLE,
                aperture_angle: LONG_RUNWAY_APERTURE_ANGLE,
            },
            SitePlacement {
                kind: SiteKind::ShortRunway,
                x: SHORT_RUNWAY_POSITION.0,
                y: SHORT_RUNWAY_POSITION.1,
                center_angle: SHORT_RUNWAY_CENTER_ANGLE,
                aperture_angle: SHORT_RUNWAY_APERTURE_ANGLE,
            },
            SitePlacement {
                kind: SiteKind::Helipad,
                x: HELIPAD_POSITION.0,
                y: HELIPAD_POSITION.1,
                center_angle: 0.0,
                aperture_angle: HELIPAD_APERTURE_ANGLE,
            },
        ]
    }

    pub fn validate(&self) -> ContractResult<()> {
        ensure_finite("site x", self.x)?;
        ensure_finite("site y", self.y)?;
        ensure_finite("site center angle", self.center_angle)?;
        validate_aperture(self.aperture_angle)
    }
}

/// Apertures are a span of headings and can never exceed a full turn.
pub fn validate_aperture(aperture: f64) -> ContractResult<()> {
    if !(0.0..=TAU).contains(&aperture) {
        return Err(ContractError::ApertureOutOfRange(aperture));
    }
    Ok(())
}

/// Size and speed envelope of one aircraft category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryProfile {
    pub radius: f64,
    pub min_speed: f64,
    pub max_speed: f64,
}

impl CategoryProfile {
    pub fn validate(&self) -> ContractResult<()> {
        ensure_finite("radius", self.radius)?;
        if self.radius < 0.0 {
            return Err(ContractError::NegativeRadius(self.radius));
        }
        let speeds_finite = self.min_speed.is_finite() && self.max_speed.is_finite();
        if !speeds_finite || self.min_speed < 0.0 || self.min_speed > self.max_speed {
            return Err(ContractError::InvalidSpeedRange {
                min: self.min_speed,
                max: self.max_speed,
            });
        }
        Ok(())
    }
}

/// Per-category profiles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryTable {
    pub large_plane: CategoryProfile,
    pub light_plane: CategoryProfile,
    pub helicopter: CategoryProfile,
}

impl CategoryTable {
    pub fn get(&self, category: AircraftCategory) -> &CategoryProfile {
        match category {
            AircraftCategory::LargePlane => &self.large_plane,
            AircraftCategory::LightPlane => &self.light_plane,
            AircraftCategory::Helicopter => &self.helicopter,
        }
    }

    pub fn validate(&self) -> ContractResult<()> {
        AircraftCategory::ALL
            .iter()
            .try_for_each(|category| self.get(*category).validate())
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self {
            large_plane: CategoryProfile {
                radius: LARGE_PLANE_RADIUS,
                min_speed: LARGE_PLANE_MIN_SPEED,
                max_speed: LARGE_PLANE_MAX_SPEED,
            },
            light_plane: CategoryProfile {
                radius: LIGHT_PLANE_RADIUS,
                min_speed: LIGHT_PLANE_MIN_SPEED,
                max_speed: LIGHT_PLANE_MAX_SPEED,
            },
            helicopter: CategoryProfile {
                radius: HELICOPTER_RADIUS,
                min_speed: HELICOPTER_MIN_SPEED,
                max_speed: HELICOPTER_MAX_SPEED,
            },
        }
    }
}

/// Spawn timing: each delay is drawn from `[min_delay, min_delay + jitter)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnTiming {
    pub min_delay: Duration,
    pub jitter: Duration,
}

impl Default for SpawnTiming {
    fn default() -> Self {
        Self {
            min_delay: Duration::from_millis(SPAWN_MIN_DELAY_MS),
            jitter: Duration::from_millis(SPAWN_JITTER_MS),
        }
    }
}

/// Complete configuration for a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub bounds: Bounds,
    pub sites: Vec<SitePlacement>,
    pub categories: CategoryTable,
    pub tick_period_ms: u64,
    pub spawn_min_delay_ms: u64,
    pub spawn_jitter_ms: u64,
    pub selection_margin: f64,
    /// RNG seed for the aircraft generator. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
            sites: SitePlacement::defaults(),
            categories: CategoryTable::default(),
            tick_period_ms: TICK_PERIOD_MS,
            spawn_min_delay_ms: SPAWN_MIN_DELAY_MS,
            spawn_jitter_ms: SPAWN_JITTER_MS,
            selection_margin: SELECTION_MARGIN,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Check every construction contract. Returns the first violation found.
    pub fn validate(&self) -> ContractResult<()> {
        self.aerodrome()?;
        if self.sites.is_empty() {
            return Err(ContractError::NoLandingSites);
        }
        self.sites.iter().try_for_each(SitePlacement::validate)?;
        self.categories.validate()?;
        if self.tick_period_ms == 0 {
            return Err(ContractError::ZeroTickPeriod);
        }
        if self.spawn_min_delay_ms == 0 && self.spawn_jitter_ms == 0 {
            return Err(ContractError::ZeroSpawnInterval);
        }
        if !self.selection_margin.is_finite() || self.selection_margin <= 0.0 {
            return Err(ContractError::InvalidSelectionMargin(self.selection_margin));
        }
        Ok(())
    }

    pub fn aerodrome(&self) -> ContractResult<Aerodrome> {
        Aerodrome::try_from(self.bounds)
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }

    pub fn spawn_timing(&self) -> SpawnTiming {
        SpawnTiming {
            min_delay: Duration::from_millis(self.spawn_min_delay_ms),
            jitter: Duration::from_millis(self.spawn_jitter_ms),
        }
    }
}
