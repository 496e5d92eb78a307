use serde::Serialize;
use std::f32::consts::PI;
use strum::{Display, EnumCount, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The right side runs half a gait cycle behind the left.
    pub fn phase_offset(self) -> f32 {
        match self {
            Side::Left => 0.0,
            Side::Right => PI,
        }
    }

    /// Left landmarks sit at smaller x in the frontal view.
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Anatomical keypoints of the walking figure, in drawing order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumCount, Serialize,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum Landmark {
    Nose,
    LeftEye,
    RightEye,
    LeftEar,
    RightEar,
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
    LeftHeel,
    RightHeel,
    LeftFootIndex,
    RightFootIndex,
}

impl Landmark {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn side(self) -> Option<Side> {
        use Landmark::*;
        match self {
            Nose => None,
            LeftEye | LeftEar | LeftShoulder | LeftElbow | LeftWrist | LeftHip | LeftKnee
            | LeftAnkle | LeftHeel | LeftFootIndex => Some(Side::Left),
            _ => Some(Side::Right),
        }
    }

    /// The same keypoint on the other side of the body. The nose is its own mirror.
    pub fn mirror(self) -> Self {
        use Landmark::*;
        match self {
            Nose => Nose,
            LeftEye => RightEye,
            RightEye => LeftEye,
            LeftEar => RightEar,
            RightEar => LeftEar,
            LeftShoulder => RightShoulder,
            RightShoulder => LeftShoulder,
            LeftElbow => RightElbow,
            RightElbow => LeftElbow,
            LeftWrist => RightWrist,
            RightWrist => LeftWrist,
            LeftHip => RightHip,
            RightHip => LeftHip,
            LeftKnee => RightKnee,
            RightKnee => LeftKnee,
            LeftAnkle => RightAnkle,
            RightAnkle => LeftAnkle,
            LeftHeel => RightHeel,
            RightHeel => LeftHeel,
            LeftFootIndex => RightFootIndex,
            RightFootIndex => LeftFootIndex,
        }
    }

    /// Fill color of the keypoint marker, grouped by body part
    pub fn color(self) -> &'static str {
        use Landmark::*;
        match self {
            Nose => "#ef4444",
            LeftEye | RightEye => "#3b82f6",
            LeftEar | RightEar => "#8b5cf6",
            LeftShoulder | RightShoulder => "#10b981",
            LeftElbow | RightElbow => "#f59e0b",
            LeftWrist | RightWrist => "#06b6d4",
            LeftHip | RightHip => "#ec4899",
            LeftKnee | RightKnee => "#84cc16",
            LeftAnkle | RightAnkle => "#f97316",
            LeftHeel | RightHeel | LeftFootIndex | RightFootIndex => "#6366f1",
        }
    }

    /// Short caption shown next to the major joints while recording
    pub fn label(self) -> Option<&'static str> {
        use Landmark::*;
        let label = match self {
            Nose => "Nose",
            LeftShoulder => "L.Shoulder",
            RightShoulder => "R.Shoulder",
            LeftElbow => "L.Elbow",
            RightElbow => "R.Elbow",
            LeftHip => "L.Hip",
            RightHip => "R.Hip",
            LeftKnee => "L.Knee",
            RightKnee => "R.Knee",
            LeftAnkle => "L.Ankle",
            RightAnkle => "R.Ankle",
            _ => return None,
        };
        Some(label)
    }
}

pub type Connection = (Landmark, Landmark);

/// Segments of the frontal-view skeleton. Independent of phase.
pub const CONNECTIONS: [Connection; 21] = {
    use Landmark::*;
    [
        // face
        (LeftEye, RightEye),
        (LeftEye, Nose),
        (RightEye, Nose),
        (LeftEye, LeftEar),
        (RightEye, RightEar),
        // torso
        (LeftShoulder, RightShoulder),
        (LeftShoulder, LeftHip),
        (RightShoulder, RightHip),
        (LeftHip, RightHip),
        // arms
        (LeftShoulder, LeftElbow),
        (LeftElbow, LeftWrist),
        (RightShoulder, RightElbow),
        (RightElbow, RightWrist),
        // legs
        (LeftHip, LeftKnee),
        (LeftKnee, LeftAnkle),
        (LeftAnkle, LeftHeel),
        (LeftAnkle, LeftFootIndex),
        (RightHip, RightKnee),
        (RightKnee, RightAnkle),
        (RightAnkle, RightHeel),
        (RightAnkle, RightFootIndex),
    ]
};
