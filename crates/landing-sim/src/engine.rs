//! Simulation engine: owns the live aircraft set and the session lifecycle.
//!
//! `Game` is a cheap, cloneable handle. All live state sits behind one
//! mutex; the tick worker, the aircraft generator and input calls each take
//! it for the whole of their work, and re-check the session phase after
//! acquiring it so nothing mutates state once a session has ended.
//!
//! Background workers hold only `Weak` references to the engine, and the
//! state lock is never held while a worker is stopped or joined.

use std::collections::BTreeMap;
use std::ops::ControlFlow;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};
use std::time::{Duration, Instant};

use hecs::World;
use tracing::{info, trace};

use landing_core::commands::PlayerCommand;
use landing_core::config::GameConfig;
use landing_core::enums::GamePhase;
use landing_core::events::{EventListener, GameEvent};
use landing_core::state::GameStateSnapshot;
use landing_core::types::{Aerodrome, AircraftId, Position};

use crate::aircraft::Aircraft;
use crate::error::SimResult;
use crate::generator::AircraftGenerator;
use crate::landing_site::LandingSite;
use crate::systems::{flight, selection, snapshot};
use crate::worker::{FixedRate, Worker};
use crate::world_setup;

/// Handle to one game engine. Clones share the same engine.
#[derive(Clone)]
pub struct Game {
    shared: Arc<Shared>,
}

struct Shared {
    config: GameConfig,
    aerodrome: Aerodrome,
    state: Mutex<SessionState>,
    workers: Mutex<Workers>,
    /// Serializes initialize/stop/game_over against each other.
    lifecycle: Mutex<()>,
    listener: RwLock<Option<Arc<dyn EventListener>>>,
}

/// Everything guarded by the single state lock.
struct SessionState {
    world: World,
    sites: Vec<LandingSite>,
    score: u32,
    phase: GamePhase,
    /// Bumped by every initialize; stale worker firings compare against it.
    session: u64,
}

struct Workers {
    session: u64,
    generator: AircraftGenerator,
    ticker: Option<Worker>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Game {
    /// Create an engine. Nothing runs until `initialize`.
    pub fn new(config: GameConfig) -> SimResult<Self> {
        config.validate()?;
        let aerodrome = config.aerodrome()?;
        let generator = AircraftGenerator::new(
            aerodrome,
            config.categories,
            config.spawn_timing(),
            config.seed,
        )?;

        Ok(Self {
            shared: Arc::new(Shared {
                aerodrome,
                state: Mutex::new(SessionState {
                    world: World::new(),
                    sites: Vec::new(),
                    score: 0,
                    phase: GamePhase::NotStarted,
                    session: 0,
                }),
                workers: Mutex::new(Workers {
                    session: 0,
                    generator,
                    ticker: None,
                }),
                lifecycle: Mutex::new(()),
                listener: RwLock::new(None),
                config,
            }),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.shared.config
    }

    /// Register the event listener, replacing any previous one.
    pub fn set_listener(&self, listener: Arc<dyn EventListener>) {
        *self
            .shared
            .listener
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(listener);
    }

    pub fn clear_listener(&self) {
        *self
            .shared
            .listener
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Start a new session: score reset, sites rebuilt, live set cleared,
    /// then the aircraft generator and the periodic tick are started.
    pub fn initialize(&self) -> SimResult<()> {
        let _lifecycle = lock(&self.shared.lifecycle);
        let session = self.shared.reset_session()?;
        if let Err(err) = Shared::start_workers(&self.shared, session) {
            self.shared.halt_workers(None);
            lock(&self.shared.state).phase = GamePhase::Stopped;
            return Err(err);
        }
        Ok(())
    }

    /// Start a new session without background workers. The caller drives
    /// time with `advance` and supplies aircraft with `add_aircraft`.
    pub fn initialize_manual(&self) -> SimResult<()> {
        let _lifecycle = lock(&self.shared.lifecycle);
        self.shared.reset_session()?;
        Ok(())
    }

    /// End the session without a crash. No tick or generation side effect
    /// happens after this returns.
    pub fn stop(&self) {
        let _lifecycle = lock(&self.shared.lifecycle);
        {
            let mut state = lock(&self.shared.state);
            if state.phase == GamePhase::Running {
                state.phase = GamePhase::Stopped;
                info!(session = state.session, score = state.score, "session stopped");
            }
        }
        self.shared.halt_workers(None);
    }

    /// Force the terminal game-over state.
    pub fn game_over(&self) {
        let _lifecycle = lock(&self.shared.lifecycle);
        let session = {
            let mut state = lock(&self.shared.state);
            if state.phase != GamePhase::Running {
                return;
            }
            self.shared.enter_game_over(&mut state, Vec::new());
            state.session
        };
        self.shared.halt_workers(Some(session));
    }

    /// Run exactly one tick with the given elapsed time. Returns false when
    /// no session is running.
    pub fn advance(&self, elapsed: Duration) -> bool {
        let session = {
            let mut state = lock(&self.shared.state);
            if state.phase != GamePhase::Running {
                return false;
            }
            if self.shared.run_tick(&mut state, elapsed).is_continue() {
                return true;
            }
            state.session
        };
        self.shared.halt_workers(Some(session));
        true
    }

    /// Put an aircraft into the live set, as the generator does.
    pub fn add_aircraft(&self, aircraft: Aircraft) -> bool {
        let session = lock(&self.shared.state).session;
        self.shared.on_aircraft_generated(session, aircraft).is_continue()
    }

    /// Select the first aircraft within `radius * selection_margin` of the
    /// point and deselect every other one.
    pub fn select_aircraft_at_position(&self, point: Position) -> bool {
        let mut state = lock(&self.shared.state);
        if state.phase != GamePhase::Running {
            return false;
        }
        let mut events = Vec::new();
        let selected = selection::select_at(
            &mut state.world,
            &point,
            self.shared.config.selection_margin,
            &mut events,
        );
        self.shared.emit(&events);
        selected.is_some()
    }

    /// Turn the selected aircraft towards the point and deselect it.
    /// Returns false when nothing is selected.
    pub fn orientate_selected_aircraft(&self, point: Position) -> bool {
        let mut state = lock(&self.shared.state);
        if state.phase != GamePhase::Running {
            return false;
        }
        let mut events = Vec::new();
        let redirected = selection::orientate_selected(&mut state.world, &point, &mut events);
        self.shared.emit(&events);
        redirected.is_some()
    }

    pub fn apply(&self, command: PlayerCommand) -> bool {
        match command {
            PlayerCommand::SelectAt { .. } => self.select_aircraft_at_position(command.point()),
            PlayerCommand::OrientateSelected { .. } => {
                self.orientate_selected_aircraft(command.point())
            }
        }
    }

    pub fn phase(&self) -> GamePhase {
        lock(&self.shared.state).phase
    }

    pub fn score(&self) -> u32 {
        lock(&self.shared.state).score
    }

    pub fn aerodrome(&self) -> Aerodrome {
        self.shared.aerodrome
    }

    pub fn sites(&self) -> Vec<LandingSite> {
        lock(&self.shared.state).sites.clone()
    }

    pub fn live_count(&self) -> usize {
        lock(&self.shared.state).world.len() as usize
    }

    pub fn selected(&self) -> Option<AircraftId> {
        snapshot::selected(&lock(&self.shared.state).world)
    }

    /// Deep copy of `{id → position}` for every live aircraft.
    pub fn positions(&self) -> BTreeMap<AircraftId, Position> {
        snapshot::positions(&lock(&self.shared.state).world)
    }

    pub fn snapshot(&self) -> GameStateSnapshot {
        let state = lock(&self.shared.state);
        snapshot::build_snapshot(
            &state.world,
            &state.sites,
            &self.shared.aerodrome,
            state.phase,
            state.score,
        )
    }

    /// Whether the background generator is currently scheduled.
    pub fn is_generating(&self) -> bool {
        lock(&self.shared.workers).generator.is_running()
    }
}

impl Shared {
    fn emit(&self, events: &[GameEvent]) {
        let listener = self
            .listener
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if let Some(listener) = listener {
            for event in events {
                listener.on_event(event);
            }
        }
    }

    /// Stop the previous session's workers and lay out a fresh session.
    fn reset_session(&self) -> SimResult<u64> {
        self.halt_workers(None);
        let sites = world_setup::build_sites(&self.config.sites)?;

        let mut state = lock(&self.state);
        state.world.clear();
        state.sites = sites;
        state.score = 0;
        state.phase = GamePhase::Running;
        state.session += 1;

        let events: Vec<GameEvent> = state.sites.iter().map(world_setup::site_created).collect();
        self.emit(&events);
        info!(session = state.session, sites = state.sites.len(), "session started");
        Ok(state.session)
    }

    fn start_workers(shared: &Arc<Shared>, session: u64) -> SimResult<()> {
        let mut workers = lock(&shared.workers);
        workers.session = session;

        let weak = Arc::downgrade(shared);
        workers.generator.start(Box::new(move |aircraft: Aircraft| match weak.upgrade() {
            Some(shared) => shared.on_aircraft_generated(session, aircraft),
            None => ControlFlow::Break(()),
        }))?;

        let weak = Arc::downgrade(shared);
        let mut rate = FixedRate::new(shared.config.tick_period());
        let mut last_tick = Instant::now();
        let ticker = Worker::spawn(
            "game-tick",
            move || rate.next_delay(),
            move || {
                let Some(shared) = weak.upgrade() else {
                    return ControlFlow::Break(());
                };
                let now = Instant::now();
                let elapsed = now - last_tick;
                last_tick = now;
                let flow = shared.tick(session, elapsed);
                if flow.is_break() {
                    shared.halt_workers(Some(session));
                }
                flow
            },
        )?;
        workers.ticker = Some(ticker);
        Ok(())
    }

    /// Stop the generator and the ticker. With `Some(session)`, only if
    /// they still belong to that session.
    fn halt_workers(&self, session: Option<u64>) {
        let ticker = {
            let mut workers = lock(&self.workers);
            if session.is_some_and(|s| s != workers.session) {
                return;
            }
            workers.generator.stop();
            workers.ticker.take()
        };
        // Joined outside the workers lock: the ticker may be waiting on it.
        if let Some(ticker) = ticker {
            ticker.stop();
        }
    }

    fn on_aircraft_generated(&self, session: u64, aircraft: Aircraft) -> ControlFlow<()> {
        let mut state = lock(&self.state);
        if state.phase != GamePhase::Running || state.session != session {
            return ControlFlow::Break(());
        }
        let (_entity, event) = world_setup::spawn_aircraft(&mut state.world, aircraft);
        self.emit(&[event]);
        ControlFlow::Continue(())
    }

    fn tick(&self, session: u64, elapsed: Duration) -> ControlFlow<()> {
        let mut state = lock(&self.state);
        if state.phase != GamePhase::Running || state.session != session {
            return ControlFlow::Break(());
        }
        self.run_tick(&mut state, elapsed)
    }

    fn run_tick(&self, state: &mut SessionState, elapsed: Duration) -> ControlFlow<()> {
        let mut events = Vec::new();
        let report = flight::run(
            &mut state.world,
            &state.sites,
            &self.aerodrome,
            elapsed.as_secs_f64(),
            &mut events,
        );
        state.score += report.landed;

        if report.crash.is_some() {
            self.enter_game_over(state, events);
            return ControlFlow::Break(());
        }

        events.push(GameEvent::PositionsChanged);
        trace!(
            live = state.world.len(),
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            score = state.score,
            "tick"
        );
        self.emit(&events);
        ControlFlow::Continue(())
    }

    fn enter_game_over(&self, state: &mut SessionState, mut events: Vec<GameEvent>) {
        state.phase = GamePhase::GameOver;
        events.push(GameEvent::GameOver);
        info!(session = state.session, score = state.score, "game over");
        self.emit(&events);
    }
}
