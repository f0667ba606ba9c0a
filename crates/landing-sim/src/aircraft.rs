//! Aircraft entity: kinematics, collision and landing predicates.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU32, Ordering};

use glam::DVec2;

use landing_core::config::CategoryProfile;
use landing_core::config::CategoryTable;
use landing_core::enums::AircraftCategory;
use landing_core::error::{ensure_finite, ContractError, ContractResult};
use landing_core::state::AircraftView;
use landing_core::types::{normalize_angle, AircraftId, Position};

use crate::landing_site::LandingSite;

/// Process-wide id counter. Ids start at 1 and are never reused.
static NEXT_AIRCRAFT_ID: AtomicU32 = AtomicU32::new(1);

fn next_id() -> AircraftId {
    AircraftId(NEXT_AIRCRAFT_ID.fetch_add(1, Ordering::Relaxed))
}

/// A flying aircraft. Equality and hashing use the id only.
#[derive(Debug, Clone)]
pub struct Aircraft {
    id: AircraftId,
    category: AircraftCategory,
    /// Aerodrome units per second.
    speed: f64,
    /// Radians, `[0, 2π)`.
    direction: f64,
    radius: f64,
    position: Position,
    selected: bool,
}

impl Aircraft {
    /// Create an aircraft with the default radius of its category.
    pub fn new(
        category: AircraftCategory,
        speed: f64,
        direction: f64,
        position: Position,
    ) -> ContractResult<Self> {
        let profile = CategoryTable::default();
        Self::with_profile(category, profile.get(category), speed, direction, position)
    }

    /// Create an aircraft whose radius comes from `profile`. The speed only
    /// has to be non-negative; the profile's speed range is a spawn policy.
    pub fn with_profile(
        category: AircraftCategory,
        profile: &CategoryProfile,
        speed: f64,
        direction: f64,
        position: Position,
    ) -> ContractResult<Self> {
        profile.validate()?;
        ensure_finite("speed", speed)?;
        if speed < 0.0 {
            return Err(ContractError::NegativeSpeed(speed));
        }
        ensure_finite("direction", direction)?;
        ensure_finite("aircraft x", position.x)?;
        ensure_finite("aircraft y", position.y)?;

        Ok(Self {
            id: next_id(),
            category,
            speed,
            direction: normalize_angle(direction),
            radius: profile.radius,
            position,
            selected: false,
        })
    }

    pub fn id(&self) -> AircraftId {
        self.id
    }

    pub fn category(&self) -> AircraftCategory {
        self.category
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn direction(&self) -> f64 {
        self.direction
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn select(&mut self) {
        self.selected = true;
    }

    pub fn deselect(&mut self) {
        self.selected = false;
    }

    /// First-order straight-line step over `elapsed_secs`.
    pub fn move_forward(&mut self, elapsed_secs: f64) {
        let delta = DVec2::from_angle(self.direction) * (self.speed * elapsed_secs);
        self.position.add(Position::from(delta));
    }

    /// Point the aircraft at `target`. A target on top of the aircraft
    /// leaves the heading unchanged.
    pub fn change_direction(&mut self, target: &Position) {
        let dx = target.x - self.position.x;
        let dy = target.y - self.position.y;
        if dx == 0.0 && dy == 0.0 {
            return;
        }
        self.direction = normalize_angle(dy.atan2(dx));
    }

    /// Circles touching or overlapping. Never true against itself.
    pub fn crashes_with(&self, other: &Aircraft) -> bool {
        self.id != other.id
            && self.position.distance_to(&other.position) <= self.radius + other.radius
    }

    /// Proximity (own radius), entry heading and category must all agree.
    pub fn land(&self, site: &LandingSite) -> bool {
        self.position.distance_to(site.position()) <= self.radius
            && site.verify_direction(self.direction)
            && site.accepts(self.category)
    }

    pub fn view(&self) -> AircraftView {
        AircraftView {
            id: self.id,
            category: self.category,
            position: self.position,
            direction: self.direction,
            speed: self.speed,
            radius: self.radius,
            selected: self.selected,
        }
    }
}

impl PartialEq for Aircraft {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Aircraft {}

impl Hash for Aircraft {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Aircraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Id={} Spd={} Dir={:.1} Rad={} Pos={}",
            self.category,
            self.id.0,
            self.speed,
            self.direction.to_degrees(),
            self.radius,
            self.position
        )
    }
}
