use crate::metrics::{
    Category, Clinical, Energy, Gauge, Kinetic, MetricsBundle, Reading, Spatial, Stability,
    Temporal,
};
use crate::session::SessionState;
use crate::units::Unit;
use serde::Serialize;
use std::fmt::{Display, Formatter};
use strum::IntoEnumIterator;

/// One tile of the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub title: String,
    pub value: f32,
    pub unit: Unit,
}

impl Card {
    fn new(title: &str, value: f32, unit: Unit) -> Self {
        Self {
            title: title.to_string(),
            value,
            unit,
        }
    }
}

impl From<Reading> for Card {
    fn from(Reading { gauge, value }: Reading) -> Self {
        Self::new(gauge.title, value, gauge.unit)
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:<24}{:>8.1} {}", self.title, self.value, self.unit)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub category: Category,
    pub cards: Vec<Card>,
}

/// Gauges with a card in each dashboard section, in display order. Walking
/// speed is a headline card; the remaining readings only appear in snapshots.
pub fn dashboard(category: Category) -> &'static [Gauge] {
    match category {
        Category::Temporal => &[
            Temporal::STEP_LENGTH,
            Temporal::STRIDE_LENGTH,
            Temporal::STEP_TIME,
            Temporal::STRIDE_TIME,
            Temporal::SWING_TIME,
            Temporal::STANCE_TIME,
        ],
        Category::Spatial => &[
            Spatial::STEP_WIDTH,
            Spatial::FOOT_ANGLE,
            Spatial::HIP_ABDUCTION,
            Spatial::KNEE_FLEXION,
            Spatial::ANKLE_FLEXION,
            Spatial::PELVIC_TILT,
        ],
        Category::Kinetic => &[
            Kinetic::GROUND_REACTION_FORCE,
            Kinetic::LOADING_RATE,
            Kinetic::PUSH_OFF_FORCE,
            Kinetic::IMPACT_PEAK,
            Kinetic::MEDIOLATERAL_FORCE,
            Kinetic::ANTERIOR_POSTERIOR_FORCE,
        ],
        Category::Stability => &[
            Stability::GAIT_SYMMETRY,
            Stability::DYNAMIC_STABILITY,
            Stability::LATERAL_STABILITY,
            Stability::RHYTHMICITY,
            Stability::CENTER_OF_MASS_DISPLACEMENT,
            Stability::VARIABILITY,
        ],
        Category::Energy => &[
            Energy::METABOLIC_COST,
            Energy::MECHANICAL_WORK,
            Energy::EFFICIENCY,
            Energy::POWER_GENERATION,
            Energy::POWER_ABSORPTION,
        ],
        Category::Clinical => &[
            Clinical::GAIT_DEVIATION_INDEX,
            Clinical::WALKING_HANDICAP,
            Clinical::FUNCTIONAL_MOBILITY,
            Clinical::FALL_RISK,
            Clinical::FATIGUE_INDEX,
            Clinical::CONFIDENCE_LEVEL,
        ],
    }
}

/// The report view shown when a session reaches its cap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub generated: String,
    pub session: SessionState,
    pub metrics: MetricsBundle,
}

impl Report {
    pub fn new(session: SessionState, metrics: MetricsBundle) -> Self {
        Self {
            generated: chrono::Local::now().format("%Y-%m-%d %H:%M").to_string(),
            session,
            metrics,
        }
    }

    pub fn headline(&self) -> Vec<Card> {
        vec![
            Card::new("Total Steps", self.session.step_count as f32, Unit::Steps),
            Card::new("Final Cadence", *self.session.cadence, Unit::StepsPerMinute),
            Card::new(
                "Recording Time",
                *self.session.elapsed_seconds(),
                Unit::RecordingSeconds,
            ),
            Card::new(
                "Walking Speed",
                self.metrics.temporal.walking_speed,
                Unit::MetersPerSecond,
            ),
        ]
    }

    pub fn sections(&self) -> Vec<Section> {
        Category::iter()
            .map(|category| {
                let readings = self.metrics.readings(category);
                let cards = dashboard(category)
                    .iter()
                    .filter_map(|gauge| readings.iter().find(|reading| reading.gauge == *gauge))
                    .map(|reading| Card::from(*reading))
                    .collect();
                Section { category, cards }
            })
            .collect()
    }

    /// The clinical narrative at the bottom of the report
    pub fn summary(&self) -> String {
        let clinical = &self.metrics.clinical;
        let stability = &self.metrics.stability;
        format!(
            "Patient demonstrates {} gait patterns with a symmetry of {:.1}%. \
             Dynamic stability is {}. \
             Fall risk assessment indicates {} risk. \
             Recommend {}.",
            pattern_quality(clinical.gait_deviation_index),
            stability.gait_symmetry,
            stability_verdict(stability.dynamic_stability),
            fall_risk_level(clinical.fall_risk),
            recommendation(clinical.functional_mobility),
        )
    }
}

pub fn pattern_quality(gait_deviation_index: f32) -> &'static str {
    if gait_deviation_index > 85.0 {
        "excellent"
    } else if gait_deviation_index > 70.0 {
        "good"
    } else {
        "concerning"
    }
}

pub fn stability_verdict(dynamic_stability: f32) -> &'static str {
    if dynamic_stability > 85.0 {
        "within normal limits"
    } else {
        "below recommended thresholds"
    }
}

pub fn fall_risk_level(fall_risk: f32) -> &'static str {
    if fall_risk < 20.0 {
        "low"
    } else if fall_risk < 40.0 {
        "moderate"
    } else {
        "high"
    }
}

pub fn recommendation(functional_mobility: f32) -> &'static str {
    if functional_mobility < 80.0 {
        "targeted rehabilitation"
    } else {
        "maintenance of current activity level"
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Gait Analysis Report ({})", self.generated)?;
        writeln!(f)?;
        for card in self.headline() {
            writeln!(f, "  {card}")?;
        }
        for section in self.sections() {
            writeln!(f)?;
            writeln!(f, "{}", section.category)?;
            for card in &section.cards {
                writeln!(f, "  {card}")?;
            }
        }
        writeln!(f)?;
        write!(f, "{}", self.summary())
    }
}
