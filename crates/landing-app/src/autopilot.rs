//! Autopilot: steers every live aircraft onto a compatible landing site.
//!
//! Directional sites get a two-leg approach. The aircraft first flies to a
//! fix placed upstream of the site along its centre heading, then turns to
//! the site itself, so it arrives on the centre line. Full-circle sites are
//! approached directly. The autopilot only reads snapshots and returns
//! player commands; the caller applies them.

use std::collections::HashMap;
use std::f64::consts::TAU;

use glam::DVec2;
use tracing::debug;

use landing_core::commands::PlayerCommand;
use landing_core::constants::ANGLE_EPSILON;
use landing_core::state::{AircraftView, GameStateSnapshot, SiteView};
use landing_core::types::{Aerodrome, AircraftId, Position};

/// Distance of the approach fix from the site, along the centre line.
pub const APPROACH_DISTANCE: f64 = 15.0;

/// Extra clearance when testing whether another aircraft covers a select
/// point, for movement between the snapshot and the command.
const SELECTION_SLACK: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Leg {
    /// Heading for the fix; `site` is where to turn next.
    Approach { fix: Position, site: Position },
    Final,
}

#[derive(Debug)]
pub struct Autopilot {
    selection_margin: f64,
    plans: HashMap<AircraftId, Leg>,
}

impl Autopilot {
    /// `selection_margin` must match the engine's, so the autopilot knows
    /// which aircraft a select command will actually pick.
    pub fn new(selection_margin: f64) -> Self {
        Self {
            selection_margin,
            plans: HashMap::new(),
        }
    }

    pub fn planned(&self) -> usize {
        self.plans.len()
    }

    /// Commands needed this round. Each redirect is a select followed by an
    /// orientate, so the pairs must be applied in order. An aircraft whose
    /// select point is covered by a lower-id aircraft is left for a later
    /// round, since the engine would select that other aircraft.
    pub fn steer(&mut self, snapshot: &GameStateSnapshot) -> Vec<PlayerCommand> {
        self.plans
            .retain(|id, _| snapshot.aircraft.iter().any(|a| a.id == *id));

        let mut commands = Vec::new();
        for aircraft in &snapshot.aircraft {
            if self.shadowed(aircraft, &snapshot.aircraft) {
                continue;
            }
            let target = match self.plans.get(&aircraft.id).copied() {
                None => self.plan(aircraft, &snapshot.sites, &snapshot.aerodrome),
                Some(Leg::Approach { fix, site }) if fix_reached(aircraft, &fix) => {
                    self.plans.insert(aircraft.id, Leg::Final);
                    Some(site)
                }
                Some(_) => None,
            };

            if let Some(target) = target {
                debug!(id = aircraft.id.0, target = %target, "autopilot redirect");
                commands.push(PlayerCommand::SelectAt {
                    x: aircraft.position.x,
                    y: aircraft.position.y,
                });
                commands.push(PlayerCommand::OrientateSelected {
                    x: target.x,
                    y: target.y,
                });
            }
        }
        commands
    }

    /// Whether a select at `aircraft`'s position could pick a lower-id
    /// aircraft, which comes first in the engine's selection order.
    fn shadowed(&self, aircraft: &AircraftView, all: &[AircraftView]) -> bool {
        all.iter().any(|other| {
            other.id < aircraft.id
                && other.position.distance_to(&aircraft.position)
                    <= other.radius * self.selection_margin + SELECTION_SLACK
        })
    }

    /// Pick the nearest accepting site and return the first heading target.
    fn plan(
        &mut self,
        aircraft: &AircraftView,
        sites: &[SiteView],
        aerodrome: &Aerodrome,
    ) -> Option<Position> {
        let site = sites
            .iter()
            .filter(|site| site.kind.accepts(aircraft.category))
            .min_by(|a, b| {
                let da = aircraft.position.distance_to(&a.position);
                let db = aircraft.position.distance_to(&b.position);
                da.total_cmp(&db)
            })?;

        match approach_fix(site, aerodrome) {
            Some(fix) => {
                self.plans.insert(
                    aircraft.id,
                    Leg::Approach {
                        fix,
                        site: site.position,
                    },
                );
                Some(fix)
            }
            None => {
                self.plans.insert(aircraft.id, Leg::Final);
                Some(site.position)
            }
        }
    }
}

/// The point upstream of a directional site along its centre heading.
/// `None` for full-circle sites or when the fix would fall off the aerodrome.
pub fn approach_fix(site: &SiteView, aerodrome: &Aerodrome) -> Option<Position> {
    if site.aperture_angle >= TAU - ANGLE_EPSILON {
        return None;
    }
    let back = DVec2::from_angle(site.center_angle) * -APPROACH_DISTANCE;
    let fix = Position::from(site.position.as_dvec2() + back);
    (!aerodrome.is_out_of_bounds(&fix)).then_some(fix)
}

/// Close enough to the fix, or already past it along the current heading.
fn fix_reached(aircraft: &AircraftView, fix: &Position) -> bool {
    if aircraft.position.distance_to(fix) <= aircraft.radius {
        return true;
    }
    let to_fix = fix.as_dvec2() - aircraft.position.as_dvec2();
    to_fix.dot(DVec2::from_angle(aircraft.direction)) < 0.0
}
