use crate::phase::Phase;
use crate::session::SessionState;
use crate::units::Seconds;
use serde::Serialize;
use std::fmt::{Display, Formatter};

pub mod config;
pub mod error;
pub mod lab;
pub mod metrics;
pub mod phase;
pub mod pose;
pub mod render;
pub mod report;
#[cfg(not(target_arch = "wasm32"))]
pub mod scheduler;
pub mod session;
pub mod skeleton;
pub mod units;
#[cfg(target_arch = "wasm32")]
pub mod web;

/// Elapsed session time, counted in whole milliseconds so that timer ticks
/// accumulate without rounding drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Age(u64);

impl Display for Age {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}s", self.0 as f64 / 1_000.0)
    }
}

impl Age {
    pub const ZERO: Age = Age(0);

    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    pub fn millis(&self) -> u64 {
        self.0
    }

    pub fn seconds(&self) -> Seconds {
        Seconds((self.0 as f64 / 1_000.0) as f32)
    }

    pub fn advanced(&self, millis: u64) -> Self {
        Self(self.0.saturating_add(millis))
    }

    pub fn within(&self, limit: &Self) -> bool {
        self.0 < limit.0
    }
}

/// What the scheduler tells its observers.
#[derive(Debug, Clone)]
pub enum LabEvent {
    Started,
    Frame(Phase),
    Tick(SessionState),
    Terminated(SessionState),
    Reset,
}

impl LabEvent {
    /// Frames and ticks are the only events produced by the periodic callbacks.
    pub fn is_periodic(&self) -> bool {
        matches!(self, LabEvent::Frame(_) | LabEvent::Tick(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_accumulates_exactly() {
        let mut age = Age::ZERO;
        for _ in 0..150 {
            age = age.advanced(100);
        }
        assert_eq!(age, Age::from_millis(15_000));
        assert_eq!(*age.seconds(), 15.0);
        assert_eq!(age.to_string(), "15.0s");
    }

    #[test]
    fn test_age_within() {
        let cap = Age::from_millis(15_000);
        assert!(Age::from_millis(14_900).within(&cap));
        assert!(!cap.within(&cap));
    }
}
