/*
 * Copyright (c) 2020. Beautiful Code BV, Rotterdam, Netherlands
 * Licensed under GNU GENERAL PUBLIC LICENSE Version 3.
 */

//! Vector drawing of the walking figure

use crate::pose::{Pose, GROUND_Y};
use crate::skeleton::{Landmark, Side};
use std::fmt::Write;
use strum::IntoEnumIterator;

const WIDTH: f32 = 400.0;
const HEIGHT: f32 = 350.0;
const JOINT_RADIUS: f32 = 4.0;
const CONTACT_RADIUS: f32 = 6.0;

/// Render a pose as a standalone SVG document. While recording, planted feet
/// get a contact marker and the major joints are labeled.
pub fn svg(pose: &Pose, recording: bool) -> String {
    let mut out = String::new();
    // fmt::Write into a String cannot fail
    let _ = write_svg(&mut out, pose, recording);
    out
}

fn write_svg(out: &mut String, pose: &Pose, recording: bool) -> std::fmt::Result {
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}">"#
    )?;
    writeln!(
        out,
        r##"  <line x1="0" y1="{GROUND_Y}" x2="{WIDTH}" y2="{GROUND_Y}" stroke="#e5e7eb" stroke-width="2"/>"##
    )?;
    for (alpha, omega) in pose.segments() {
        writeln!(
            out,
            r##"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="#374151" stroke-width="2"/>"##,
            alpha.x, alpha.y, omega.x, omega.y
        )?;
    }
    for (landmark, position) in pose.landmarks() {
        writeln!(
            out,
            r#"  <circle cx="{:.2}" cy="{:.2}" r="{JOINT_RADIUS}" fill="{}" stroke="white" stroke-width="1"><title>{landmark}</title></circle>"#,
            position.x,
            position.y,
            landmark.color()
        )?;
    }
    if recording {
        for side in Side::iter().filter(|&side| pose.ground_contact(side)) {
            let heel = match side {
                Side::Left => pose.position(Landmark::LeftHeel),
                Side::Right => pose.position(Landmark::RightHeel),
            };
            writeln!(
                out,
                r##"  <circle cx="{:.2}" cy="{:.2}" r="{CONTACT_RADIUS}" fill="#ef4444" opacity="0.7"/>"##,
                heel.x,
                heel.y + 5.0
            )?;
        }
        writeln!(out, r##"  <g font-size="10" fill="#4b5563">"##)?;
        for landmark in Landmark::iter() {
            let Some(label) = landmark.label() else {
                continue;
            };
            let position = pose.position(landmark);
            let (dx, dy) = label_offset(landmark);
            writeln!(
                out,
                r#"    <text x="{:.2}" y="{:.2}">{label}</text>"#,
                position.x + dx,
                position.y + dy
            )?;
        }
        writeln!(out, "  </g>")?;
    }
    writeln!(out, "</svg>")
}

fn label_offset(landmark: Landmark) -> (f32, f32) {
    use Landmark::*;
    match landmark {
        Nose => (8.0, -5.0),
        LeftShoulder => (-25.0, 0.0),
        LeftElbow => (-20.0, 0.0),
        LeftHip | LeftKnee | LeftAnkle => (-15.0, 0.0),
        _ => (10.0, 0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phase::Phase;
    use crate::skeleton::CONNECTIONS;
    use std::f32::consts::PI;
    use strum::EnumCount;

    #[test]
    fn test_idle_figure() {
        let svg = svg(&Pose::solve(Phase::ZERO), false);
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches("<circle").count(), Landmark::COUNT);
        assert_eq!(svg.matches("<line").count(), CONNECTIONS.len() + 1);
        assert!(!svg.contains("<text"));
        assert!(svg.contains(r#"viewBox="0 0 400 350""#));
    }

    #[test]
    fn test_recording_marks_planted_foot() {
        // mid-swing of the left leg, only the right foot is down
        let pose = Pose::solve(Phase::new(PI / 2.0));
        assert!(!pose.ground_contact(Side::Left));
        assert!(pose.ground_contact(Side::Right));
        let svg = svg(&pose, true);
        assert_eq!(svg.matches("<circle").count(), Landmark::COUNT + 1);
        assert_eq!(svg.matches("<text").count(), 11);
        assert!(svg.contains(">L.Knee<"));
    }
}
