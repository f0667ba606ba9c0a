//! Selection and re-orientation of aircraft from player input.

use hecs::World;

use landing_core::events::GameEvent;
use landing_core::types::{AircraftId, Position};

use crate::aircraft::Aircraft;
use crate::systems::flight::flight_order;

/// Select the first aircraft (in iteration order) within `radius * margin`
/// of `point`, deselecting every other one. Leaves the selection untouched
/// and returns `None` when nothing is close enough.
pub fn select_at(
    world: &mut World,
    point: &Position,
    margin: f64,
    events: &mut Vec<GameEvent>,
) -> Option<AircraftId> {
    let target = flight_order(world).into_iter().find_map(|entity| {
        let aircraft = world.get::<&Aircraft>(entity).ok()?;
        (aircraft.position().distance_to(point) <= aircraft.radius() * margin)
            .then(|| aircraft.id())
    })?;

    for (_entity, aircraft) in world.query_mut::<&mut Aircraft>() {
        if aircraft.id() != target && aircraft.is_selected() {
            aircraft.deselect();
            events.push(GameEvent::AircraftDeselected { id: aircraft.id() });
        }
    }
    for (_entity, aircraft) in world.query_mut::<&mut Aircraft>() {
        if aircraft.id() == target {
            aircraft.select();
            events.push(GameEvent::AircraftSelected { id: target });
        }
    }

    Some(target)
}

/// Point the selected aircraft at `point` and deselect it.
pub fn orientate_selected(
    world: &mut World,
    point: &Position,
    events: &mut Vec<GameEvent>,
) -> Option<AircraftId> {
    let (_entity, aircraft) = world
        .query_mut::<&mut Aircraft>()
        .into_iter()
        .find(|(_, aircraft)| aircraft.is_selected())?;

    aircraft.change_direction(point);
    aircraft.deselect();
    events.push(GameEvent::AircraftRedirected {
        id: aircraft.id(),
        direction: aircraft.direction(),
    });
    events.push(GameEvent::AircraftDeselected { id: aircraft.id() });
    Some(aircraft.id())
}
