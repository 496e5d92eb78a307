use serde::Serialize;
use std::f32::consts::{PI, TAU};
use std::fmt::{Display, Formatter};

/// Radians added on every animation frame
pub const PHASE_INCREMENT: f32 = 0.1;

/// Position within one gait cycle, always in `[0, 2π)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
pub struct Phase(f32);

impl Phase {
    pub const ZERO: Phase = Phase(0.0);

    pub fn new(radians: f32) -> Self {
        Self(wrap(radians))
    }

    pub fn radians(&self) -> f32 {
        self.0
    }

    pub fn advanced(&self, increment: f32) -> Self {
        Self::new(self.0 + increment)
    }

    /// Half a cycle away, where the other side of the body is.
    pub fn opposite(&self) -> Self {
        Self::new(self.0 + PI)
    }
}

impl Display for Phase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3} rad", self.0)
    }
}

/// One animation frame of the phase clock.
pub fn advance(phase: Phase) -> Phase {
    phase.advanced(PHASE_INCREMENT)
}

fn wrap(radians: f32) -> f32 {
    if !radians.is_finite() {
        return 0.0;
    }
    let wrapped = radians.rem_euclid(TAU);
    // rem_euclid rounds up to TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_stays_in_cycle() {
        let mut radians = -50.0;
        while radians < 50.0 {
            let advanced = advance(Phase::new(radians)).radians();
            assert!((0.0..TAU).contains(&advanced), "{radians} advanced to {advanced}");
            radians += 0.0137;
        }
    }

    #[test]
    fn test_advance_is_deterministic() {
        let phase = Phase::new(2.5);
        assert_eq!(advance(phase), advance(phase));
        assert!((advance(phase).radians() - 2.6).abs() < 1e-6);
    }

    #[test]
    fn test_wraps_at_full_cycle() {
        let phase = Phase::new(TAU - 0.05);
        let advanced = advance(phase).radians();
        assert!((advanced - 0.05).abs() < 1e-5);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(Phase::new(f32::NAN), Phase::ZERO);
        assert_eq!(Phase::new(f32::INFINITY), Phase::ZERO);
        assert!(Phase::new(-1e-9).radians() < TAU);
    }

    #[test]
    fn test_full_revolution_returns_near_start() {
        let mut phase = Phase::ZERO;
        for _ in 0..63 {
            phase = advance(phase);
        }
        // 63 increments of 0.1 is 6.3, just past 2π
        assert!((phase.radians() - (6.3 - TAU)).abs() < 1e-4);
    }
}
