//! Snapshot system: deep copies of the live set for readers outside the lock.
//!
//! This system is read-only. It never modifies the world.

use std::collections::BTreeMap;

use hecs::World;

use landing_core::enums::GamePhase;
use landing_core::state::{AircraftView, GameStateSnapshot};
use landing_core::types::{Aerodrome, AircraftId, Position};

use crate::aircraft::Aircraft;
use crate::landing_site::LandingSite;

pub fn build_snapshot(
    world: &World,
    sites: &[LandingSite],
    aerodrome: &Aerodrome,
    phase: GamePhase,
    score: u32,
) -> GameStateSnapshot {
    GameStateSnapshot {
        phase,
        score,
        aerodrome: *aerodrome,
        sites: sites.iter().map(LandingSite::view).collect(),
        aircraft: build_aircraft(world),
    }
}

fn build_aircraft(world: &World) -> Vec<AircraftView> {
    let mut aircraft: Vec<AircraftView> = world
        .query::<&Aircraft>()
        .iter()
        .map(|(_, aircraft)| aircraft.view())
        .collect();

    aircraft.sort_by_key(|a| a.id);
    aircraft
}

/// `{id → position}` for every live aircraft.
pub fn positions(world: &World) -> BTreeMap<AircraftId, Position> {
    world
        .query::<&Aircraft>()
        .iter()
        .map(|(_, aircraft)| (aircraft.id(), *aircraft.position()))
        .collect()
}

/// The currently selected aircraft, if any.
pub fn selected(world: &World) -> Option<AircraftId> {
    let mut query = world.query::<&Aircraft>();
    let selected = query
        .iter()
        .find(|(_, aircraft)| aircraft.is_selected())
        .map(|(_, aircraft)| aircraft.id());
    selected
}
