/*
 * Copyright (c) 2020. Beautiful Code BV, Rotterdam, Netherlands
 * Licensed under GNU GENERAL PUBLIC LICENSE Version 3.
 */

//! Units for gait readings
//!
//! Type-safe wrappers for the few quantities the session itself tracks,
//! and the unit labels shown next to every sampled reading.

use serde::Serialize;
use std::ops::Deref;
use strum::Display;

/// Time in seconds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
pub struct Seconds(pub f32);

/// Cadence in steps per minute
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize)]
pub struct StepsPerMinute(pub f32);

impl Deref for Seconds {
    type Target = f32;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Deref for StepsPerMinute {
    type Target = f32;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl StepsPerMinute {
    /// Shift by a delta, never going below zero.
    pub fn nudged(self, delta: f32) -> Self {
        Self((self.0 + delta).max(0.0))
    }
}

impl std::fmt::Display for Seconds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}s", self.0)
    }
}

impl std::fmt::Display for StepsPerMinute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} spm", self.0)
    }
}

/// The unit label printed after a reading on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
pub enum Unit {
    #[strum(to_string = "steps")]
    Steps,
    #[strum(to_string = "spm")]
    StepsPerMinute,
    #[strum(to_string = "sec")]
    RecordingSeconds,
    #[strum(to_string = "s")]
    Seconds,
    #[strum(to_string = "cm")]
    Centimeters,
    #[strum(to_string = "m/s")]
    MetersPerSecond,
    #[strum(to_string = "°")]
    Degrees,
    /// Multiples of body weight
    #[strum(to_string = "BW")]
    BodyWeight,
    #[strum(to_string = "N/kg/s")]
    NewtonsPerKilogramSecond,
    #[strum(to_string = "%")]
    Percent,
    #[strum(to_string = "J/kg/m")]
    JoulesPerKilogramMeter,
    #[strum(to_string = "W/kg")]
    WattsPerKilogram,
    /// Dimensionless clinical score
    #[strum(to_string = "")]
    Score,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cadence_never_negative() {
        let cadence = StepsPerMinute(1.0);
        assert_eq!(*cadence.nudged(-2.5), 0.0);
        assert_eq!(*cadence.nudged(2.0), 3.0);
    }

    #[test]
    fn test_unit_labels() {
        assert_eq!(Unit::Degrees.to_string(), "°");
        assert_eq!(Unit::Score.to_string(), "");
        assert_eq!(Unit::NewtonsPerKilogramSecond.to_string(), "N/kg/s");
    }

    #[test]
    fn test_display() {
        assert_eq!(Seconds(4.96).to_string(), "5.0s");
        assert_eq!(StepsPerMinute(101.24).to_string(), "101.2 spm");
    }
}
