//! Session setup: landing sites and live-set insertion.

use hecs::{Entity, World};
use tracing::debug;

use landing_core::config::SitePlacement;
use landing_core::error::ContractResult;
use landing_core::events::GameEvent;

use crate::aircraft::Aircraft;
use crate::landing_site::LandingSite;

/// Build the session's landing sites from their placements.
pub fn build_sites(placements: &[SitePlacement]) -> ContractResult<Vec<LandingSite>> {
    placements.iter().map(LandingSite::from_placement).collect()
}

pub fn site_created(site: &LandingSite) -> GameEvent {
    debug!(kind = ?site.kind(), position = %site.position(), "site created");
    GameEvent::SiteCreated {
        kind: site.kind(),
        position: *site.position(),
        center_angle: site.center_angle(),
        aperture_angle: site.aperture_angle(),
    }
}

/// Insert an aircraft into the live set and describe it for listeners.
pub fn spawn_aircraft(world: &mut World, aircraft: Aircraft) -> (Entity, GameEvent) {
    let event = GameEvent::AircraftCreated {
        id: aircraft.id(),
        category: aircraft.category(),
        position: *aircraft.position(),
        direction: aircraft.direction(),
    };
    debug!(aircraft = %aircraft, "aircraft added to live set");
    (world.spawn((aircraft,)), event)
}
