//! Enumeration types used throughout the simulation.

use std::f64::consts::TAU;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Aircraft category. Determines radius, speed range and which landing
/// sites will accept the aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AircraftCategory {
    LargePlane,
    LightPlane,
    Helicopter,
}

impl AircraftCategory {
    pub const ALL: [AircraftCategory; 3] = [
        AircraftCategory::LargePlane,
        AircraftCategory::LightPlane,
        AircraftCategory::Helicopter,
    ];
}

impl fmt::Display for AircraftCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AircraftCategory::LargePlane => "LargePlane",
            AircraftCategory::LightPlane => "LightPlane",
            AircraftCategory::Helicopter => "Helicopter",
        };
        f.write_str(name)
    }
}

/// Landing site variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SiteKind {
    LongRunway,
    ShortRunway,
    Helipad,
}

impl SiteKind {
    pub const ALL: [SiteKind; 3] = [
        SiteKind::LongRunway,
        SiteKind::ShortRunway,
        SiteKind::Helipad,
    ];

    /// Acceptance matrix: which categories may land on this kind of site.
    pub fn accepts(self, category: AircraftCategory) -> bool {
        use AircraftCategory::*;
        match self {
            SiteKind::LongRunway => matches!(category, LargePlane | LightPlane),
            SiteKind::ShortRunway => matches!(category, LightPlane),
            SiteKind::Helipad => matches!(category, Helicopter),
        }
    }

    /// Aperture imposed by the site kind regardless of placement.
    pub fn fixed_aperture(self) -> Option<f64> {
        match self {
            SiteKind::Helipad => Some(TAU),
            SiteKind::LongRunway | SiteKind::ShortRunway => None,
        }
    }
}

/// Session state (top-level).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No session has been initialized yet.
    #[default]
    NotStarted,
    Running,
    /// Session ended by an explicit stop, without a crash.
    Stopped,
    /// Session ended by a collision. Terminal until the next initialize.
    GameOver,
}

/// One side of the aerodrome rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Bottom,
    Right,
    Top,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Bottom, Edge::Right, Edge::Top, Edge::Left];

    /// Heading (radians) of the inward normal of this edge.
    pub fn inward_heading(self) -> f64 {
        use std::f64::consts::{FRAC_PI_2, PI};
        match self {
            Edge::Bottom => FRAC_PI_2,
            Edge::Right => PI,
            Edge::Top => 3.0 * FRAC_PI_2,
            Edge::Left => 0.0,
        }
    }
}
