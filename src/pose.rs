/*
 * Copyright (c) 2020. Beautiful Code BV, Rotterdam, Netherlands
 * Licensed under GNU GENERAL PUBLIC LICENSE Version 3.
 */

//! Walking figure kinematics
//!
//! Every landmark is derived from the gait phase alone. The torso rides on
//! two slow oscillations (vertical bob at twice the step rate, lateral sway
//! at the step rate) and each limb is a short chain where a joint is its
//! parent plus a phase-dependent offset. The right side uses the same
//! formulas half a cycle later, which gives alternating legs and opposite
//! arm swing.

use crate::phase::Phase;
use crate::skeleton::{Landmark, Side, CONNECTIONS};
use glam::Vec2;
use strum::{EnumCount, IntoEnumIterator};

/// Where the nose would be with no bob or sway
pub const BASE: Vec2 = Vec2::new(200.0, 100.0);
/// The walking surface in drawing coordinates
pub const GROUND_Y: f32 = 300.0;

const BOB_AMPLITUDE: f32 = 2.0;
const SWAY_AMPLITUDE: f32 = 1.5;

const EYE: Vec2 = Vec2::new(8.0, -3.0);
const EAR: Vec2 = Vec2::new(12.0, 0.0);
const SHOULDER: Vec2 = Vec2::new(25.0, 35.0);
const HIP: Vec2 = Vec2::new(12.0, 85.0);

const ARM_SWING_AMPLITUDE: f32 = 15.0;
const UPPER_ARM: f32 = 40.0;
const FOREARM: f32 = 30.0;

const LIFT_AMPLITUDE: f32 = 15.0;
const THIGH: f32 = 45.0;
const SHIN: f32 = 45.0;
const KNEE_STRIDE: f32 = 8.0;
const ANKLE_STRIDE: f32 = 5.0;
const KNEE_LIFT_SHARE: f32 = 0.7;
const FOOT: Vec2 = Vec2::new(6.0, 8.0);

/// Ankle depth below the nose at which the foot counts as planted
const CONTACT_DEPTH: f32 = 170.0;

/// Vertical bob of the whole body, twice per gait cycle.
pub fn body_bob(phase: Phase) -> f32 {
    (2.0 * phase.radians()).sin() * BOB_AMPLITUDE
}

/// Lateral weight shift, once per gait cycle.
pub fn body_sway(phase: Phase) -> f32 {
    phase.radians().sin() * SWAY_AMPLITUDE
}

fn limb_angle(phase: Phase, side: Side) -> f32 {
    phase.radians() + side.phase_offset()
}

/// Horizontal arm swing for one side.
pub fn arm_swing(phase: Phase, side: Side) -> f32 {
    limb_angle(phase, side).sin() * ARM_SWING_AMPLITUDE
}

/// How far a foot is raised. Zero for the half cycle the leg is in stance.
pub fn leg_lift(phase: Phase, side: Side) -> f32 {
    limb_angle(phase, side).sin().max(0.0) * LIFT_AMPLITUDE
}

struct Arm {
    elbow: Vec2,
    wrist: Vec2,
}

impl Arm {
    fn from_shoulder(shoulder: Vec2, swing: f32) -> Self {
        let elbow = shoulder + Vec2::new(swing * 0.7, UPPER_ARM + swing.abs() * 0.2);
        let wrist = elbow + Vec2::new(swing * 0.5, FOREARM);
        Self { elbow, wrist }
    }
}

struct Leg {
    knee: Vec2,
    ankle: Vec2,
}

impl Leg {
    fn from_hip(hip: Vec2, angle: f32, lift: f32) -> Self {
        let stride = angle.sin();
        let knee = hip + Vec2::new(-stride * KNEE_STRIDE, THIGH - lift * KNEE_LIFT_SHARE);
        let ankle = knee + Vec2::new(-stride * ANKLE_STRIDE, SHIN - lift * (1.0 - KNEE_LIFT_SHARE));
        Self { knee, ankle }
    }
}

/// All landmark positions for one phase of the gait cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Pose {
    phase: Phase,
    center: Vec2,
    positions: [Vec2; Landmark::COUNT],
}

impl Pose {
    pub fn solve(phase: Phase) -> Self {
        use Landmark::*;
        let sway = body_sway(phase);
        let center = BASE + Vec2::new(sway, body_bob(phase));
        let mut positions = [Vec2::ZERO; Landmark::COUNT];
        let mut place = |landmark: Landmark, position: Vec2| positions[landmark.index()] = position;
        place(Nose, center);
        for side in Side::iter() {
            let mirror = Vec2::new(side.sign(), 1.0);
            let pick = |left: Landmark| match side {
                Side::Left => left,
                Side::Right => left.mirror(),
            };
            place(pick(LeftEye), center + EYE * mirror);
            place(pick(LeftEar), center + EAR * mirror);

            let shoulder = center + SHOULDER * mirror;
            let arm = Arm::from_shoulder(shoulder, arm_swing(phase, side));
            place(pick(LeftShoulder), shoulder);
            place(pick(LeftElbow), arm.elbow);
            place(pick(LeftWrist), arm.wrist);

            let hip = center + HIP * mirror + Vec2::new(sway * 0.5, 0.0);
            let leg = Leg::from_hip(hip, limb_angle(phase, side), leg_lift(phase, side));
            place(pick(LeftHip), hip);
            place(pick(LeftKnee), leg.knee);
            place(pick(LeftAnkle), leg.ankle);
            place(pick(LeftHeel), leg.ankle + Vec2::new(-FOOT.x, FOOT.y));
            place(pick(LeftFootIndex), leg.ankle + FOOT);
        }
        Self {
            phase,
            center,
            positions,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The nose position, carrying bob and sway
    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn position(&self, landmark: Landmark) -> Vec2 {
        self.positions[landmark.index()]
    }

    pub fn landmarks(&self) -> impl Iterator<Item = (Landmark, Vec2)> + '_ {
        Landmark::iter().map(|landmark| (landmark, self.position(landmark)))
    }

    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        CONNECTIONS
            .iter()
            .map(|&(alpha, omega)| (self.position(alpha), self.position(omega)))
    }

    /// Whether the foot on this side is planted on the ground.
    pub fn ground_contact(&self, side: Side) -> bool {
        let ankle = match side {
            Side::Left => Landmark::LeftAnkle,
            Side::Right => Landmark::RightAnkle,
        };
        self.position(ankle).y >= self.center.y + CONTACT_DEPTH
    }
}
