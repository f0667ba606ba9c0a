//! One real-time session on the main thread.
//!
//! The engine's listener only forwards events over a channel. Logging,
//! tallying and autopilot commands all happen here, outside the engine's
//! state lock.

use std::sync::mpsc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info};

use landing_core::config::GameConfig;
use landing_core::enums::GamePhase;
use landing_core::events::GameEvent;
use landing_sim::Game;

use crate::autopilot::Autopilot;
use crate::error::AppResult;

/// Longest wait for an event before the deadline is rechecked.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub duration: Duration,
    pub autopilot: bool,
}

/// Running counts of what happened in a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EventTally {
    pub created: u32,
    pub landed: u32,
    pub left_bounds: u32,
    pub redirected: u32,
    pub crashes: u32,
    pub ticks: u64,
}

impl EventTally {
    pub fn record(&mut self, event: &GameEvent) {
        match event {
            GameEvent::AircraftCreated { .. } => self.created += 1,
            GameEvent::AircraftLanded { .. } => self.landed += 1,
            GameEvent::AircraftLeftBounds { .. } => self.left_bounds += 1,
            GameEvent::AircraftRedirected { .. } => self.redirected += 1,
            GameEvent::Crash { .. } => self.crashes += 1,
            GameEvent::PositionsChanged => self.ticks += 1,
            _ => {}
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub phase: GamePhase,
    pub score: u32,
    pub elapsed_secs: f64,
    pub events: EventTally,
}

pub fn run_session(config: GameConfig, options: &SessionOptions) -> AppResult<SessionSummary> {
    let game = Game::new(config)?;
    let (tx, rx) = mpsc::channel::<GameEvent>();
    game.set_listener(Arc::new(move |event: &GameEvent| {
        let _ = tx.send(event.clone());
    }));

    let mut autopilot = options
        .autopilot
        .then(|| Autopilot::new(game.config().selection_margin));
    let mut tally = EventTally::default();
    let started = Instant::now();
    let deadline = started + options.duration;

    game.initialize()?;
    info!(
        seconds = options.duration.as_secs_f64(),
        autopilot = options.autopilot,
        "running session"
    );

    loop {
        let now = Instant::now();
        if now >= deadline {
            break;
        }
        let event = match rx.recv_timeout(POLL_INTERVAL.min(deadline - now)) {
            Ok(event) => event,
            Err(mpsc::RecvTimeoutError::Timeout) => continue,
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        };

        tally.record(&event);
        match &event {
            GameEvent::PositionsChanged => {
                if let Some(autopilot) = autopilot.as_mut() {
                    for command in autopilot.steer(&game.snapshot()) {
                        game.apply(command);
                    }
                }
            }
            GameEvent::GameOver => break,
            other => debug!(event = ?other, "event"),
        }
    }

    game.stop();
    game.clear_listener();

    let summary = SessionSummary {
        phase: game.phase(),
        score: game.score(),
        elapsed_secs: started.elapsed().as_secs_f64(),
        events: tally,
    };
    info!(score = summary.score, phase = ?summary.phase, "session finished");
    Ok(summary)
}
