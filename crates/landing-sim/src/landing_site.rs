//! Landing sites: a fixed entrance with a category policy and an entry arc.

use landing_core::config::{validate_aperture, SitePlacement};
use landing_core::constants::ANGLE_EPSILON;
use landing_core::enums::{AircraftCategory, SiteKind};
use landing_core::error::{ensure_finite, ContractResult};
use landing_core::state::SiteView;
use landing_core::types::{normalize_angle, wrap_signed, Position};

use std::f64::consts::TAU;

#[derive(Debug, Clone, PartialEq)]
pub struct LandingSite {
    kind: SiteKind,
    position: Position,
    /// Radians, `[0, 2π)`.
    center_angle: f64,
    /// Radians, `[0, 2π]`.
    aperture_angle: f64,
}

impl LandingSite {
    /// Build a site. Helipads always accept every heading, whatever
    /// angles are passed in.
    pub fn new(
        kind: SiteKind,
        position: Position,
        center_angle: f64,
        aperture_angle: f64,
    ) -> ContractResult<Self> {
        ensure_finite("site x", position.x)?;
        ensure_finite("site y", position.y)?;
        ensure_finite("site center angle", center_angle)?;
        let aperture_angle = kind.fixed_aperture().unwrap_or(aperture_angle);
        validate_aperture(aperture_angle)?;
        Ok(Self {
            kind,
            position,
            center_angle: normalize_angle(center_angle),
            aperture_angle,
        })
    }

    pub fn helipad(position: Position) -> ContractResult<Self> {
        Self::new(SiteKind::Helipad, position, 0.0, TAU)
    }

    pub fn from_placement(placement: &SitePlacement) -> ContractResult<Self> {
        Self::new(
            placement.kind,
            placement.position(),
            placement.center_angle,
            placement.aperture_angle,
        )
    }

    pub fn kind(&self) -> SiteKind {
        self.kind
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn center_angle(&self) -> f64 {
        self.center_angle
    }

    pub fn aperture_angle(&self) -> f64 {
        self.aperture_angle
    }

    pub fn accepts(&self, category: AircraftCategory) -> bool {
        self.kind.accepts(category)
    }

    /// Whether a heading falls inside `center ± aperture/2`.
    ///
    /// The difference is wrapped into `(-π, π]` first, so arcs that straddle
    /// the 0/2π seam behave like any other arc.
    pub fn verify_direction(&self, direction: f64) -> bool {
        if self.aperture_angle >= TAU {
            return true;
        }
        let difference = wrap_signed(direction - self.center_angle);
        difference.abs() <= self.aperture_angle / 2.0 + ANGLE_EPSILON
    }

    pub fn view(&self) -> SiteView {
        SiteView {
            kind: self.kind,
            position: self.position,
            center_angle: self.center_angle,
            aperture_angle: self.aperture_angle,
        }
    }
}
