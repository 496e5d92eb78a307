use crate::error::LabError;
use crate::phase::PHASE_INCREMENT;
use crate::units::StepsPerMinute;
use crate::Age;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::ops::RangeInclusive;
use std::time::Duration;

/// Frame rates the animation clock can be asked for
pub const FRAME_RATES: RangeInclusive<f32> = 1.0..=1_000.0;

/// Longest timer period and session a configuration may ask for
pub const LONGEST_TICK_MILLIS: u64 = 60_000;
pub const LONGEST_SESSION_MILLIS: u64 = 3_600_000;

/// Timing and sampling parameters of a recording session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    /// Length of a recording session
    pub session_millis: u64,
    /// Period of the session timer
    pub tick_millis: u64,
    /// Animation frame rate the scheduler aims for
    pub frames_per_second: f32,
    /// Radians the gait phase advances per frame
    pub phase_increment: f32,
    /// Chance that any one timer tick registers a step
    pub step_probability: f64,
    /// Width of the symmetric random walk applied to cadence each tick
    pub cadence_jitter: f32,
    /// Cadence a session starts from, in steps per minute
    pub starting_cadence: f32,
    /// Fixed random seed, otherwise seeded from the clock
    pub seed: Option<u64>,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            session_millis: 15_000,
            tick_millis: 100,
            frames_per_second: 60.0,
            phase_increment: PHASE_INCREMENT,
            step_probability: 0.15,
            cadence_jitter: 5.0,
            starting_cadence: 100.0,
            seed: None,
        }
    }
}

impl LabConfig {
    /// Read a JSON configuration. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LabError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, LabError> {
        let config: LabConfig = serde_json::from_str(text)?;
        config.validated()
    }

    pub fn validated(self) -> Result<Self, LabError> {
        let invalid =
            |reason: String| -> Result<Self, LabError> { Err(LabError::InvalidConfig(reason)) };
        if !(1..=LONGEST_TICK_MILLIS).contains(&self.tick_millis) {
            return invalid(format!("tick_millis {}", self.tick_millis));
        }
        if self.session_millis > LONGEST_SESSION_MILLIS {
            return invalid(format!("session_millis {}", self.session_millis));
        }
        if self.session_millis < self.tick_millis {
            return invalid(format!(
                "session_millis {} is shorter than one tick",
                self.session_millis
            ));
        }
        if !FRAME_RATES.contains(&self.frames_per_second) {
            return invalid(format!("frames_per_second {}", self.frames_per_second));
        }
        if !self.phase_increment.is_finite() {
            return invalid(format!("phase_increment {}", self.phase_increment));
        }
        if !(0.0..=1.0).contains(&self.step_probability) {
            return invalid(format!("step_probability {}", self.step_probability));
        }
        if !(self.cadence_jitter.is_finite() && self.cadence_jitter >= 0.0) {
            return invalid(format!("cadence_jitter {}", self.cadence_jitter));
        }
        if !(self.starting_cadence.is_finite() && self.starting_cadence >= 0.0) {
            return invalid(format!("starting_cadence {}", self.starting_cadence));
        }
        Ok(self)
    }

    pub fn session_cap(&self) -> Age {
        Age::from_millis(self.session_millis)
    }

    pub fn starting_cadence(&self) -> StepsPerMinute {
        StepsPerMinute(self.starting_cadence)
    }

    /// Milliseconds one timer tick adds to a session
    pub fn tick_length(&self) -> u64 {
        self.tick_millis.clamp(1, LONGEST_TICK_MILLIS)
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_length())
    }

    pub fn frame_period(&self) -> Duration {
        Duration::from_secs_f32(1.0 / self.frame_rate())
    }

    /// Animation frames that fall within one timer tick
    pub fn frames_per_tick(&self) -> f32 {
        self.frame_rate() * self.tick_length() as f32 / 1_000.0
    }

    // fields are public, so an unvalidated rate may still arrive here
    fn frame_rate(&self) -> f32 {
        self.frames_per_second
            .max(*FRAME_RATES.start())
            .min(*FRAME_RATES.end())
    }
}
