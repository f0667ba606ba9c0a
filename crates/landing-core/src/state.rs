//! Game state snapshot: deep copies of everything a renderer needs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::{AircraftCategory, GamePhase, SiteKind};
use crate::types::{Aerodrome, AircraftId, Position};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub aerodrome: Aerodrome,
    pub sites: Vec<SiteView>,
    /// Sorted by id.
    pub aircraft: Vec<AircraftView>,
}

impl GameStateSnapshot {
    pub fn positions(&self) -> BTreeMap<AircraftId, Position> {
        self.aircraft.iter().map(|a| (a.id, a.position)).collect()
    }

    pub fn selected(&self) -> Option<&AircraftView> {
        self.aircraft.iter().find(|a| a.selected)
    }
}

/// A live aircraft as seen by the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftView {
    pub id: AircraftId,
    pub category: AircraftCategory,
    pub position: Position,
    /// Heading in radians, `[0, 2π)`.
    pub direction: f64,
    pub speed: f64,
    pub radius: f64,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteView {
    pub kind: SiteKind,
    pub position: Position,
    pub center_angle: f64,
    pub aperture_angle: f64,
}
