//! Events emitted by the simulation for rendering and score display.

use serde::{Deserialize, Serialize};

use crate::enums::{AircraftCategory, SiteKind};
use crate::types::{AircraftId, Position};

/// Everything a presentation layer may react to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A landing site was placed (once per site, at initialize).
    SiteCreated {
        kind: SiteKind,
        position: Position,
        center_angle: f64,
        aperture_angle: f64,
    },
    /// A new aircraft joined the live set.
    AircraftCreated {
        id: AircraftId,
        category: AircraftCategory,
        position: Position,
        direction: f64,
    },
    /// A tick completed without a crash.
    PositionsChanged,
    AircraftSelected { id: AircraftId },
    AircraftDeselected { id: AircraftId },
    /// The selected aircraft was turned towards a new heading.
    AircraftRedirected { id: AircraftId, direction: f64 },
    AircraftLanded { id: AircraftId, site: SiteKind },
    AircraftLeftBounds { id: AircraftId },
    Crash { first: AircraftId, second: AircraftId },
    GameOver,
}

/// Receives events synchronously from inside the engine's locked context.
/// Handlers must return quickly and must not call back into the engine.
pub trait EventListener: Send + Sync {
    fn on_event(&self, event: &GameEvent);
}

impl<F> EventListener for F
where
    F: Fn(&GameEvent) + Send + Sync,
{
    fn on_event(&self, event: &GameEvent) {
        self(event)
    }
}
