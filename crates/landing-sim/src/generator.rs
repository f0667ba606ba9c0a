//! Aircraft generator: fabricates random aircraft on the aerodrome edges
//! at randomized intervals on its own background thread.

use std::f64::consts::PI;
use std::ops::ControlFlow;
use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use landing_core::config::{CategoryTable, SpawnTiming};
use landing_core::constants::SPAWN_HEADING_MARGIN;
use landing_core::enums::{AircraftCategory, Edge};
use landing_core::error::ContractResult;
use landing_core::types::{normalize_angle, Aerodrome, Position};

use crate::aircraft::Aircraft;
use crate::error::SimResult;
use crate::worker::Worker;

/// Receives each generated aircraft. Returning `Break` ends generation.
pub type AircraftSink = Box<dyn FnMut(Aircraft) -> ControlFlow<()> + Send + 'static>;

pub struct AircraftGenerator {
    aerodrome: Aerodrome,
    categories: CategoryTable,
    timing: SpawnTiming,
    /// Master stream; every start forks a fresh stream from it.
    rng: ChaCha8Rng,
    worker: Option<Worker>,
}

impl AircraftGenerator {
    pub fn new(
        aerodrome: Aerodrome,
        categories: CategoryTable,
        timing: SpawnTiming,
        seed: Option<u64>,
    ) -> ContractResult<Self> {
        categories.validate()?;
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Ok(Self {
            aerodrome,
            categories,
            timing,
            rng,
            worker: None,
        })
    }

    pub fn is_running(&self) -> bool {
        self.worker.as_ref().is_some_and(|w| !w.is_finished())
    }

    /// Begin a fresh random schedule. Any previous schedule is stopped first.
    pub fn start(&mut self, mut sink: AircraftSink) -> SimResult<()> {
        self.stop();

        let mut delay_rng = ChaCha8Rng::seed_from_u64(self.rng.gen());
        let mut spawn_rng = ChaCha8Rng::seed_from_u64(self.rng.gen());
        let aerodrome = self.aerodrome;
        let categories = self.categories;
        let timing = self.timing;

        let worker = Worker::spawn(
            "aircraft-generator",
            move || spawn_delay(&mut delay_rng, &timing),
            move || {
                match generate_aircraft(&mut spawn_rng, &aerodrome, &categories) {
                    Ok(aircraft) => {
                        debug!(id = aircraft.id().0, category = %aircraft.category(), "aircraft generated");
                        sink(aircraft)
                    }
                    Err(err) => {
                        warn!(%err, "aircraft generation failed");
                        ControlFlow::Break(())
                    }
                }
            },
        )?;
        self.worker = Some(worker);
        Ok(())
    }

    /// Cancel pending and future firings. Blocks until an in-flight firing
    /// has returned, unless called from the generator thread itself.
    pub fn stop(&mut self) {
        if let Some(worker) = self.worker.take() {
            worker.stop();
        }
    }
}

/// Draw a delay from `[min_delay, min_delay + jitter)`.
pub fn spawn_delay(rng: &mut ChaCha8Rng, timing: &SpawnTiming) -> Duration {
    let jitter_ms = timing.jitter.as_millis() as u64;
    if jitter_ms == 0 {
        return timing.min_delay;
    }
    timing.min_delay + Duration::from_millis(rng.gen_range(0..jitter_ms))
}

/// Build a random aircraft on a random edge, heading inwards.
pub fn generate_aircraft(
    rng: &mut ChaCha8Rng,
    aerodrome: &Aerodrome,
    categories: &CategoryTable,
) -> ContractResult<Aircraft> {
    let edge = Edge::ALL[rng.gen_range(0..Edge::ALL.len())];
    let position = random_point_on_edge(rng, aerodrome, edge);
    let direction = random_inward_heading(rng, edge);

    let category = AircraftCategory::ALL[rng.gen_range(0..AircraftCategory::ALL.len())];
    let profile = categories.get(category);
    // An inverted speed range would make the draw below panic.
    profile.validate()?;
    let speed = rng.gen_range(profile.min_speed..=profile.max_speed);

    Aircraft::with_profile(category, profile, speed, direction, position)
}

fn random_point_on_edge(rng: &mut ChaCha8Rng, aerodrome: &Aerodrome, edge: Edge) -> Position {
    match edge {
        Edge::Bottom => Position::new(
            rng.gen_range(aerodrome.left()..=aerodrome.right()),
            aerodrome.bottom(),
        ),
        Edge::Top => Position::new(
            rng.gen_range(aerodrome.left()..=aerodrome.right()),
            aerodrome.top(),
        ),
        Edge::Left => Position::new(
            aerodrome.left(),
            rng.gen_range(aerodrome.bottom()..=aerodrome.top()),
        ),
        Edge::Right => Position::new(
            aerodrome.right(),
            rng.gen_range(aerodrome.bottom()..=aerodrome.top()),
        ),
    }
}

/// A heading within the half-plane facing into the aerodrome, kept
/// `SPAWN_HEADING_MARGIN` away from running along the edge.
fn random_inward_heading(rng: &mut ChaCha8Rng, edge: Edge) -> f64 {
    let half_range = PI / 2.0 - SPAWN_HEADING_MARGIN;
    let offset = rng.gen_range(-half_range..=half_range);
    normalize_angle(edge.inward_heading() + offset)
}
