//! The per-tick flight pass: move, then crash, landing and bounds checks
//! for each aircraft in turn.

use hecs::{Entity, World};
use tracing::{info, warn};

use landing_core::events::GameEvent;
use landing_core::types::{Aerodrome, AircraftId};

use crate::aircraft::Aircraft;
use crate::landing_site::LandingSite;

/// Outcome of one flight pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlightReport {
    pub landed: u32,
    pub left_bounds: u32,
    /// First colliding pair found. The pass stops there.
    pub crash: Option<(AircraftId, AircraftId)>,
}

/// Live entities in iteration order (ascending aircraft id, i.e. spawn order).
pub fn flight_order(world: &World) -> Vec<Entity> {
    let mut order: Vec<(AircraftId, Entity)> = world
        .query::<&Aircraft>()
        .iter()
        .map(|(entity, aircraft)| (aircraft.id(), entity))
        .collect();
    order.sort_unstable_by_key(|(id, _)| *id);
    order.into_iter().map(|(_, entity)| entity).collect()
}

/// Advance every aircraft by `elapsed_secs` and resolve the outcomes.
///
/// Each aircraft is moved, then tested against every other live aircraft
/// (moved this pass or not). A collision ends the pass immediately. Landing
/// is tested next (first accepting site wins), then the bounds exit. Landed
/// and departed aircraft are despawned on the spot; the iteration runs over
/// a snapshot of entity handles so later lookups of them simply miss.
pub fn run(
    world: &mut World,
    sites: &[LandingSite],
    aerodrome: &Aerodrome,
    elapsed_secs: f64,
    events: &mut Vec<GameEvent>,
) -> FlightReport {
    let order = flight_order(world);
    let mut report = FlightReport::default();

    for &entity in &order {
        let mover = match world.get::<&mut Aircraft>(entity) {
            Ok(mut aircraft) => {
                aircraft.move_forward(elapsed_secs);
                aircraft.clone()
            }
            Err(_) => continue,
        };

        if let Some(other) = first_collision(world, &order, &mover) {
            warn!(first = mover.id().0, second = other.0, "aircraft collision");
            events.push(GameEvent::Crash {
                first: mover.id(),
                second: other,
            });
            report.crash = Some((mover.id(), other));
            return report;
        }

        if let Some(site) = sites.iter().find(|site| mover.land(site)) {
            let _ = world.despawn(entity);
            info!(id = mover.id().0, site = ?site.kind(), "aircraft landed");
            events.push(GameEvent::AircraftLanded {
                id: mover.id(),
                site: site.kind(),
            });
            report.landed += 1;
            continue;
        }

        if aerodrome.is_out_of_bounds(mover.position()) {
            let _ = world.despawn(entity);
            info!(id = mover.id().0, position = %mover.position(), "aircraft left the aerodrome");
            events.push(GameEvent::AircraftLeftBounds { id: mover.id() });
            report.left_bounds += 1;
        }
    }

    report
}

fn first_collision(world: &World, order: &[Entity], mover: &Aircraft) -> Option<AircraftId> {
    order.iter().find_map(|&entity| {
        let other = world.get::<&Aircraft>(entity).ok()?;
        mover.crashes_with(&other).then(|| other.id())
    })
}
