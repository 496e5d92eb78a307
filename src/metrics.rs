//! Sampled gait readings
//!
//! Stand-in for a real analysis backend: every field is an independent
//! uniform draw from a fixed range, taken once when a session starts.

use crate::units::Unit;
use crate::units::Unit::*;
use rand::Rng;
use serde::Serialize;
use strum::{Display, EnumIter};

/// A uniform range for one reading, with its dashboard title and unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gauge {
    pub title: &'static str,
    pub low: f32,
    pub span: f32,
    pub unit: Unit,
}

impl Gauge {
    pub const fn new(title: &'static str, low: f32, span: f32, unit: Unit) -> Self {
        Self {
            title,
            low,
            span,
            unit,
        }
    }

    pub fn high(&self) -> f32 {
        self.low + self.span
    }

    pub fn sample(&self, rng: &mut impl Rng) -> f32 {
        self.low + rng.random::<f32>() * self.span
    }

    pub fn contains(&self, value: f32) -> bool {
        (self.low..=self.high()).contains(&value)
    }

    fn read(&self, value: f32) -> Reading {
        Reading {
            gauge: *self,
            value,
        }
    }
}

/// A sampled value together with the gauge it came from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub gauge: Gauge,
    pub value: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize)]
pub enum Category {
    #[strum(to_string = "Temporal Parameters")]
    Temporal,
    #[strum(to_string = "Spatial Parameters")]
    Spatial,
    #[strum(to_string = "Kinetic Parameters")]
    Kinetic,
    #[strum(to_string = "Stability & Balance")]
    Stability,
    #[strum(to_string = "Energy & Efficiency")]
    Energy,
    #[strum(to_string = "Clinical Assessment")]
    Clinical,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Temporal {
    pub step_length: f32,
    pub stride_length: f32,
    pub step_time: f32,
    pub stride_time: f32,
    pub swing_time: f32,
    pub stance_time: f32,
    pub double_support_time: f32,
    pub walking_speed: f32,
}

impl Temporal {
    pub const STEP_LENGTH: Gauge = Gauge::new("Step Length", 65.0, 20.0, Centimeters);
    pub const STRIDE_LENGTH: Gauge = Gauge::new("Stride Length", 130.0, 40.0, Centimeters);
    pub const STEP_TIME: Gauge = Gauge::new("Step Time", 0.5, 0.1, Seconds);
    pub const STRIDE_TIME: Gauge = Gauge::new("Stride Time", 1.0, 0.2, Seconds);
    pub const SWING_TIME: Gauge = Gauge::new("Swing Time", 0.35, 0.1, Seconds);
    pub const STANCE_TIME: Gauge = Gauge::new("Stance Time", 0.65, 0.1, Seconds);
    pub const DOUBLE_SUPPORT_TIME: Gauge = Gauge::new("Double Support Time", 0.1, 0.05, Seconds);
    pub const WALKING_SPEED: Gauge = Gauge::new("Walking Speed", 1.2, 0.5, MetersPerSecond);

    fn sample(rng: &mut impl Rng) -> Self {
        Self {
            step_length: Self::STEP_LENGTH.sample(rng),
            stride_length: Self::STRIDE_LENGTH.sample(rng),
            step_time: Self::STEP_TIME.sample(rng),
            stride_time: Self::STRIDE_TIME.sample(rng),
            swing_time: Self::SWING_TIME.sample(rng),
            stance_time: Self::STANCE_TIME.sample(rng),
            double_support_time: Self::DOUBLE_SUPPORT_TIME.sample(rng),
            walking_speed: Self::WALKING_SPEED.sample(rng),
        }
    }

    pub fn readings(&self) -> Vec<Reading> {
        vec![
            Self::STEP_LENGTH.read(self.step_length),
            Self::STRIDE_LENGTH.read(self.stride_length),
            Self::STEP_TIME.read(self.step_time),
            Self::STRIDE_TIME.read(self.stride_time),
            Self::SWING_TIME.read(self.swing_time),
            Self::STANCE_TIME.read(self.stance_time),
            Self::DOUBLE_SUPPORT_TIME.read(self.double_support_time),
            Self::WALKING_SPEED.read(self.walking_speed),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Spatial {
    pub step_width: f32,
    pub foot_angle: f32,
    pub hip_abduction: f32,
    pub knee_flexion: f32,
    pub ankle_flexion: f32,
    pub pelvic_tilt: f32,
    pub pelvic_rotation: f32,
}

impl Spatial {
    pub const STEP_WIDTH: Gauge = Gauge::new("Step Width", 8.0, 5.0, Centimeters);
    pub const FOOT_ANGLE: Gauge = Gauge::new("Foot Angle", 5.0, 10.0, Degrees);
    pub const HIP_ABDUCTION: Gauge = Gauge::new("Hip Abduction", 3.0, 5.0, Degrees);
    pub const KNEE_FLEXION: Gauge = Gauge::new("Knee Flexion", 50.0, 20.0, Degrees);
    pub const ANKLE_FLEXION: Gauge = Gauge::new("Ankle Flexion", 10.0, 15.0, Degrees);
    pub const PELVIC_TILT: Gauge = Gauge::new("Pelvic Tilt", 2.0, 3.0, Degrees);
    pub const PELVIC_ROTATION: Gauge = Gauge::new("Pelvic Rotation", 3.0, 4.0, Degrees);

    fn sample(rng: &mut impl Rng) -> Self {
        Self {
            step_width: Self::STEP_WIDTH.sample(rng),
            foot_angle: Self::FOOT_ANGLE.sample(rng),
            hip_abduction: Self::HIP_ABDUCTION.sample(rng),
            knee_flexion: Self::KNEE_FLEXION.sample(rng),
            ankle_flexion: Self::ANKLE_FLEXION.sample(rng),
            pelvic_tilt: Self::PELVIC_TILT.sample(rng),
            pelvic_rotation: Self::PELVIC_ROTATION.sample(rng),
        }
    }

    pub fn readings(&self) -> Vec<Reading> {
        vec![
            Self::STEP_WIDTH.read(self.step_width),
            Self::FOOT_ANGLE.read(self.foot_angle),
            Self::HIP_ABDUCTION.read(self.hip_abduction),
            Self::KNEE_FLEXION.read(self.knee_flexion),
            Self::ANKLE_FLEXION.read(self.ankle_flexion),
            Self::PELVIC_TILT.read(self.pelvic_tilt),
            Self::PELVIC_ROTATION.read(self.pelvic_rotation),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Kinetic {
    pub ground_reaction_force: f32,
    pub mediolateral_force: f32,
    pub anterior_posterior_force: f32,
    pub loading_rate: f32,
    pub push_off_force: f32,
    pub impact_peak: f32,
}

impl Kinetic {
    pub const GROUND_REACTION_FORCE: Gauge =
        Gauge::new("Ground Reaction Force", 1.1, 0.3, BodyWeight);
    pub const MEDIOLATERAL_FORCE: Gauge = Gauge::new("ML Force", 0.05, 0.1, BodyWeight);
    pub const ANTERIOR_POSTERIOR_FORCE: Gauge = Gauge::new("AP Force", 0.15, 0.2, BodyWeight);
    pub const LOADING_RATE: Gauge =
        Gauge::new("Loading Rate", 80.0, 20.0, NewtonsPerKilogramSecond);
    pub const PUSH_OFF_FORCE: Gauge = Gauge::new("Push Off Force", 0.8, 0.2, BodyWeight);
    pub const IMPACT_PEAK: Gauge = Gauge::new("Impact Peak", 0.9, 0.3, BodyWeight);

    fn sample(rng: &mut impl Rng) -> Self {
        Self {
            ground_reaction_force: Self::GROUND_REACTION_FORCE.sample(rng),
            mediolateral_force: Self::MEDIOLATERAL_FORCE.sample(rng),
            anterior_posterior_force: Self::ANTERIOR_POSTERIOR_FORCE.sample(rng),
            loading_rate: Self::LOADING_RATE.sample(rng),
            push_off_force: Self::PUSH_OFF_FORCE.sample(rng),
            impact_peak: Self::IMPACT_PEAK.sample(rng),
        }
    }

    pub fn readings(&self) -> Vec<Reading> {
        vec![
            Self::GROUND_REACTION_FORCE.read(self.ground_reaction_force),
            Self::LOADING_RATE.read(self.loading_rate),
            Self::PUSH_OFF_FORCE.read(self.push_off_force),
            Self::IMPACT_PEAK.read(self.impact_peak),
            Self::MEDIOLATERAL_FORCE.read(self.mediolateral_force),
            Self::ANTERIOR_POSTERIOR_FORCE.read(self.anterior_posterior_force),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stability {
    pub center_of_mass_displacement: f32,
    pub lateral_stability: f32,
    pub dynamic_stability: f32,
    pub gait_symmetry: f32,
    pub rhythmicity: f32,
    pub variability: f32,
}

impl Stability {
    pub const CENTER_OF_MASS_DISPLACEMENT: Gauge =
        Gauge::new("CoM Displacement", 3.0, 2.0, Centimeters);
    pub const LATERAL_STABILITY: Gauge = Gauge::new("Lateral Stability", 85.0, 10.0, Percent);
    pub const DYNAMIC_STABILITY: Gauge = Gauge::new("Dynamic Stability", 88.0, 8.0, Percent);
    pub const GAIT_SYMMETRY: Gauge = Gauge::new("Gait Symmetry", 92.0, 5.0, Percent);
    pub const RHYTHMICITY: Gauge = Gauge::new("Rhythmicity", 91.0, 6.0, Percent);
    pub const VARIABILITY: Gauge = Gauge::new("Variability", 2.0, 3.0, Percent);

    fn sample(rng: &mut impl Rng) -> Self {
        Self {
            center_of_mass_displacement: Self::CENTER_OF_MASS_DISPLACEMENT.sample(rng),
            lateral_stability: Self::LATERAL_STABILITY.sample(rng),
            dynamic_stability: Self::DYNAMIC_STABILITY.sample(rng),
            gait_symmetry: Self::GAIT_SYMMETRY.sample(rng),
            rhythmicity: Self::RHYTHMICITY.sample(rng),
            variability: Self::VARIABILITY.sample(rng),
        }
    }

    pub fn readings(&self) -> Vec<Reading> {
        vec![
            Self::GAIT_SYMMETRY.read(self.gait_symmetry),
            Self::DYNAMIC_STABILITY.read(self.dynamic_stability),
            Self::LATERAL_STABILITY.read(self.lateral_stability),
            Self::RHYTHMICITY.read(self.rhythmicity),
            Self::CENTER_OF_MASS_DISPLACEMENT.read(self.center_of_mass_displacement),
            Self::VARIABILITY.read(self.variability),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Energy {
    pub metabolic_cost: f32,
    pub mechanical_work: f32,
    pub efficiency: f32,
    pub power_generation: f32,
    pub power_absorption: f32,
}

impl Energy {
    pub const METABOLIC_COST: Gauge =
        Gauge::new("Metabolic Cost", 2.5, 0.5, JoulesPerKilogramMeter);
    pub const MECHANICAL_WORK: Gauge =
        Gauge::new("Mechanical Work", 1.2, 0.3, JoulesPerKilogramMeter);
    pub const EFFICIENCY: Gauge = Gauge::new("Efficiency", 85.0, 5.0, Percent);
    pub const POWER_GENERATION: Gauge =
        Gauge::new("Power Generation", 200.0, 50.0, WattsPerKilogram);
    pub const POWER_ABSORPTION: Gauge =
        Gauge::new("Power Absorption", 180.0, 40.0, WattsPerKilogram);

    fn sample(rng: &mut impl Rng) -> Self {
        Self {
            metabolic_cost: Self::METABOLIC_COST.sample(rng),
            mechanical_work: Self::MECHANICAL_WORK.sample(rng),
            efficiency: Self::EFFICIENCY.sample(rng),
            power_generation: Self::POWER_GENERATION.sample(rng),
            power_absorption: Self::POWER_ABSORPTION.sample(rng),
        }
    }

    pub fn readings(&self) -> Vec<Reading> {
        vec![
            Self::METABOLIC_COST.read(self.metabolic_cost),
            Self::MECHANICAL_WORK.read(self.mechanical_work),
            Self::EFFICIENCY.read(self.efficiency),
            Self::POWER_GENERATION.read(self.power_generation),
            Self::POWER_ABSORPTION.read(self.power_absorption),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Clinical {
    pub gait_deviation_index: f32,
    pub walking_handicap: f32,
    pub functional_mobility: f32,
    pub fall_risk: f32,
    pub fatigue_index: f32,
    pub pain_index: f32,
    pub confidence_level: f32,
}

impl Clinical {
    pub const GAIT_DEVIATION_INDEX: Gauge = Gauge::new("Gait Deviation Index", 80.0, 20.0, Score);
    pub const WALKING_HANDICAP: Gauge = Gauge::new("Walking Handicap", 5.0, 15.0, Score);
    pub const FUNCTIONAL_MOBILITY: Gauge = Gauge::new("Functional Mobility", 85.0, 10.0, Percent);
    pub const FALL_RISK: Gauge = Gauge::new("Fall Risk", 10.0, 20.0, Percent);
    pub const FATIGUE_INDEX: Gauge = Gauge::new("Fatigue Index", 15.0, 25.0, Score);
    pub const PAIN_INDEX: Gauge = Gauge::new("Pain Index", 5.0, 30.0, Score);
    pub const CONFIDENCE_LEVEL: Gauge = Gauge::new("Confidence Level", 80.0, 15.0, Percent);

    fn sample(rng: &mut impl Rng) -> Self {
        Self {
            gait_deviation_index: Self::GAIT_DEVIATION_INDEX.sample(rng),
            walking_handicap: Self::WALKING_HANDICAP.sample(rng),
            functional_mobility: Self::FUNCTIONAL_MOBILITY.sample(rng),
            fall_risk: Self::FALL_RISK.sample(rng),
            fatigue_index: Self::FATIGUE_INDEX.sample(rng),
            pain_index: Self::PAIN_INDEX.sample(rng),
            confidence_level: Self::CONFIDENCE_LEVEL.sample(rng),
        }
    }

    pub fn readings(&self) -> Vec<Reading> {
        vec![
            Self::GAIT_DEVIATION_INDEX.read(self.gait_deviation_index),
            Self::WALKING_HANDICAP.read(self.walking_handicap),
            Self::FUNCTIONAL_MOBILITY.read(self.functional_mobility),
            Self::FALL_RISK.read(self.fall_risk),
            Self::FATIGUE_INDEX.read(self.fatigue_index),
            Self::PAIN_INDEX.read(self.pain_index),
            Self::CONFIDENCE_LEVEL.read(self.confidence_level),
        ]
    }
}

/// Everything the report view shows beyond the session counters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricsBundle {
    pub temporal: Temporal,
    pub spatial: Spatial,
    pub kinetic: Kinetic,
    pub stability: Stability,
    pub energy: Energy,
    pub clinical: Clinical,
}

impl MetricsBundle {
    pub fn sample(rng: &mut impl Rng) -> Self {
        Self {
            temporal: Temporal::sample(rng),
            spatial: Spatial::sample(rng),
            kinetic: Kinetic::sample(rng),
            stability: Stability::sample(rng),
            energy: Energy::sample(rng),
            clinical: Clinical::sample(rng),
        }
    }

    pub fn readings(&self, category: Category) -> Vec<Reading> {
        match category {
            Category::Temporal => self.temporal.readings(),
            Category::Spatial => self.spatial.readings(),
            Category::Kinetic => self.kinetic.readings(),
            Category::Stability => self.stability.readings(),
            Category::Energy => self.energy.readings(),
            Category::Clinical => self.clinical.readings(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_reading_within_its_gauge() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..200 {
            let bundle = MetricsBundle::sample(&mut rng);
            for category in Category::iter() {
                for Reading { gauge, value } in bundle.readings(category) {
                    assert!(gauge.contains(value), "{} = {value}", gauge.title);
                }
            }
        }
    }

    #[test]
    fn test_bundle_shape() {
        let bundle = MetricsBundle::sample(&mut ChaCha8Rng::seed_from_u64(0));
        let counts: Vec<usize> = Category::iter()
            .map(|category| bundle.readings(category).len())
            .collect();
        assert_eq!(counts, vec![8, 7, 6, 6, 5, 7]);
    }

    #[test]
    fn test_same_seed_same_bundle() {
        let first = MetricsBundle::sample(&mut ChaCha8Rng::seed_from_u64(11));
        let second = MetricsBundle::sample(&mut ChaCha8Rng::seed_from_u64(11));
        assert_eq!(first, second);
    }

    #[test]
    fn test_fields_are_independent_draws() {
        let bundle = MetricsBundle::sample(&mut ChaCha8Rng::seed_from_u64(5));
        let unit_draws: Vec<f32> = bundle
            .readings(Category::Stability)
            .iter()
            .map(|reading| (reading.value - reading.gauge.low) / reading.gauge.span)
            .collect();
        let first = unit_draws[0];
        assert!(unit_draws.iter().skip(1).any(|draw| (draw - first).abs() > 1e-3));
    }

    #[test]
    fn test_serializes_with_camel_case_fields() {
        let bundle = MetricsBundle::sample(&mut ChaCha8Rng::seed_from_u64(1));
        let json = serde_json::to_value(bundle).unwrap();
        assert!(json["clinical"]["gaitDeviationIndex"].is_number());
        assert!(json["temporal"]["doubleSupportTime"].is_number());
    }
}
