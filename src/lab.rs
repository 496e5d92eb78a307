use crate::config::LabConfig;
use crate::metrics::MetricsBundle;
use crate::phase::Phase;
use crate::pose::Pose;
use crate::report::Report;
use crate::session::{SessionState, Stage, Transition};
use crate::skeleton::{Connection, Landmark, CONNECTIONS};
use log::{debug, info, trace};
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Reset,
}

/// Owns everything a session mutates: the phase clock, the session
/// counters, the sampled metrics and the random source behind them.
pub struct Lab {
    config: LabConfig,
    rng: ChaCha8Rng,
    phase: Phase,
    session: SessionState,
    metrics: Option<MetricsBundle>,
}

impl Lab {
    pub fn new(config: LabConfig) -> Self {
        let seed = config.seed.unwrap_or_else(clock_seed);
        debug!("Lab seeded with {seed}");
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            phase: Phase::ZERO,
            session: SessionState::idle(),
            metrics: None,
        }
    }

    pub fn command(&mut self, command: Command) {
        match command {
            Command::Start => self.start(),
            Command::Reset => self.reset(),
        }
    }

    /// Begin a fresh session, from whatever state the lab is in.
    pub fn start(&mut self) {
        self.session = SessionState::started(&self.config);
        self.metrics = Some(MetricsBundle::sample(&mut self.rng));
        info!("Recording started for {}", self.config.session_cap());
    }

    pub fn reset(&mut self) {
        self.session = SessionState::idle();
        self.phase = Phase::ZERO;
        self.metrics = None;
        info!("Lab reset");
    }

    /// One animation frame. Returns the new phase, or nothing when not recording.
    pub fn frame(&mut self) -> Option<Phase> {
        if !self.session.is_active() {
            return None;
        }
        self.phase = self.phase.advanced(self.config.phase_increment);
        trace!("Frame at {}", self.phase);
        Some(self.phase)
    }

    /// One period of the session timer.
    pub fn tick(&mut self) -> Option<Transition> {
        let (session, transition) = self.session.tick(&self.config, &mut self.rng);
        self.session = session;
        if session.is_active() {
            trace!(
                "{} steps {} cadence {}",
                session.elapsed,
                session.step_count,
                session.cadence
            );
        }
        if transition == Some(Transition::Terminated) {
            info!(
                "Recording finished after {} with {} steps",
                session.elapsed, session.step_count
            );
        }
        transition
    }

    /// Run a whole session without a clock, interleaving frames and ticks at
    /// the configured rates.
    pub fn record(&mut self) -> Option<Report> {
        self.start();
        let frames_per_tick = self.config.frames_per_tick();
        let mut frames_owed = 0.0_f32;
        while self.session.is_active() {
            self.tick();
            frames_owed += frames_per_tick;
            let due = frames_owed.floor();
            for _ in 0..due as u32 {
                self.frame();
            }
            frames_owed -= due;
        }
        self.report()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_active()
    }

    pub fn config(&self) -> &LabConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    pub fn metrics(&self) -> Option<&MetricsBundle> {
        self.metrics.as_ref()
    }

    pub fn pose(&self) -> Pose {
        Pose::solve(self.phase)
    }

    /// The report view, available once a session has run to its cap.
    pub fn report(&self) -> Option<Report> {
        match (self.session.stage, &self.metrics) {
            (Stage::Terminal, Some(metrics)) => Some(Report::new(self.session, *metrics)),
            _ => None,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        let pose = self.pose();
        Snapshot {
            phase: self.phase,
            landmarks: pose
                .landmarks()
                .map(|(name, position)| LandmarkPosition {
                    name,
                    x: position.x,
                    y: position.y,
                })
                .collect(),
            connections: CONNECTIONS.to_vec(),
            session: self.session,
            metrics: self.metrics,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LandmarkPosition {
    pub name: Landmark,
    pub x: f32,
    pub y: f32,
}

/// Read-only view of the lab for rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: Phase,
    pub landmarks: Vec<LandmarkPosition>,
    pub connections: Vec<Connection>,
    pub session: SessionState,
    pub metrics: Option<MetricsBundle>,
}

fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(42)
}
