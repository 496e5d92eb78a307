use crate::config::LabConfig;
use crate::units::{Seconds, StepsPerMinute};
use crate::Age;
use rand::Rng;
use serde::Serialize;
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
pub enum Stage {
    /// Not started, or reset
    Idle,
    /// Recording, counters advancing
    Active,
    /// Reached the session cap, counters frozen
    Terminal,
}

/// The one transition a timer tick can cause on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Terminated,
}

/// Counters of a recording session. Owned and replaced on every tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub stage: Stage,
    #[serde(rename = "elapsedMillis")]
    pub elapsed: Age,
    pub step_count: u32,
    pub cadence: StepsPerMinute,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::idle()
    }
}

impl SessionState {
    pub fn idle() -> Self {
        Self {
            stage: Stage::Idle,
            elapsed: Age::ZERO,
            step_count: 0,
            cadence: StepsPerMinute(0.0),
        }
    }

    pub fn started(config: &LabConfig) -> Self {
        Self {
            stage: Stage::Active,
            elapsed: Age::ZERO,
            step_count: 0,
            cadence: config.starting_cadence(),
        }
    }

    /// One period of the session timer. Anything but an active session is
    /// returned untouched, so termination is reported exactly once.
    pub fn tick(self, config: &LabConfig, rng: &mut impl Rng) -> (Self, Option<Transition>) {
        if self.stage != Stage::Active {
            return (self, None);
        }
        let step_count = if rng.random::<f64>() < config.step_probability {
            self.step_count + 1
        } else {
            self.step_count
        };
        let jitter = (rng.random::<f32>() - 0.5) * config.cadence_jitter;
        let cap = config.session_cap();
        let elapsed = self.elapsed.advanced(config.tick_length());
        let next = Self {
            stage: Stage::Active,
            elapsed,
            step_count,
            cadence: self.cadence.nudged(jitter),
        };
        if elapsed.within(&cap) {
            (next, None)
        } else {
            let terminal = Self {
                stage: Stage::Terminal,
                elapsed: cap,
                ..next
            };
            (terminal, Some(Transition::Terminated))
        }
    }

    pub fn is_active(&self) -> bool {
        self.stage == Stage::Active
    }

    pub fn elapsed_seconds(&self) -> Seconds {
        self.elapsed.seconds()
    }

    pub fn remaining(&self, config: &LabConfig) -> Seconds {
        let remaining = config.session_millis.saturating_sub(self.elapsed.millis());
        Age::from_millis(remaining).seconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn run(config: &LabConfig, ticks: usize, rng: &mut impl Rng) -> (SessionState, usize) {
        let mut state = SessionState::started(config);
        let mut terminations = 0;
        for _ in 0..ticks {
            let (next, transition) = state.tick(config, rng);
            if transition.is_some() {
                terminations += 1;
            }
            state = next;
        }
        (state, terminations)
    }

    #[test]
    fn test_terminates_exactly_once_at_the_cap() {
        let config = LabConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let (state, terminations) = run(&config, 149, &mut rng);
        assert_eq!(state.stage, Stage::Active);
        assert_eq!(terminations, 0);

        let (state, transition) = state.tick(&config, &mut rng);
        assert_eq!(transition, Some(Transition::Terminated));
        assert_eq!(state.stage, Stage::Terminal);
        assert_eq!(*state.elapsed_seconds(), 15.0);

        let (frozen, transition) = state.tick(&config, &mut rng);
        assert_eq!(transition, None);
        assert_eq!(frozen, state);
    }

    #[test]
    fn test_cap_is_clamped_when_ticks_overshoot() {
        let config = LabConfig {
            session_millis: 250,
            ..LabConfig::default()
        };
        let (state, terminations) = run(&config, 10, &mut ChaCha8Rng::seed_from_u64(2));
        assert_eq!(terminations, 1);
        assert_eq!(state.elapsed, Age::from_millis(250));
    }

    #[test]
    fn test_cadence_never_negative() {
        let config = LabConfig {
            starting_cadence: 1.0,
            cadence_jitter: 40.0,
            session_millis: 1_000_000,
            ..LabConfig::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut state = SessionState::started(&config);
        for _ in 0..5_000 {
            state = state.tick(&config, &mut rng).0;
            assert!(*state.cadence >= 0.0);
        }
    }

    /// Always draws zero: every tick steps and cadence gets the most negative jitter
    struct Floor;

    impl RngCore for Floor {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0)
        }
    }

    #[test]
    fn test_cadence_floor_with_lowest_draws() {
        let config = LabConfig::default();
        let mut rng = Floor;
        let (state, _) = run(&config, 100, &mut rng);
        assert_eq!(*state.cadence, 0.0);
        assert_eq!(state.step_count, 100);
    }

    #[test]
    fn test_idle_does_not_tick() {
        let config = LabConfig::default();
        let idle = SessionState::idle();
        let (state, transition) = idle.tick(&config, &mut ChaCha8Rng::seed_from_u64(0));
        assert_eq!(state, idle);
        assert_eq!(transition, None);
    }

    #[test]
    fn test_step_rate_near_probability() {
        let config = LabConfig {
            session_millis: 1_000_000,
            ..LabConfig::default()
        };
        let (state, _) = run(&config, 10_000, &mut ChaCha8Rng::seed_from_u64(4));
        let rate = state.step_count as f64 / 10_000.0;
        assert!((rate - 0.15).abs() < 0.02, "rate {rate}");
    }

    #[test]
    fn test_remaining() {
        let config = LabConfig::default();
        let (state, _) = run(&config, 50, &mut ChaCha8Rng::seed_from_u64(0));
        assert!((*state.remaining(&config) - 10.0).abs() < 1e-6);
    }
}
