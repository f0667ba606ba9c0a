//! Player commands sent from an input layer to the simulation.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// All possible player actions, in aerodrome coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Select the first aircraft close enough to the point.
    SelectAt { x: f64, y: f64 },
    /// Point the selected aircraft at the point, then deselect it.
    OrientateSelected { x: f64, y: f64 },
}

impl PlayerCommand {
    pub fn point(&self) -> Position {
        match *self {
            PlayerCommand::SelectAt { x, y } | PlayerCommand::OrientateSelected { x, y } => {
                Position::new(x, y)
            }
        }
    }
}
