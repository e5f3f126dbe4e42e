//! Placement anchors along the heart outline.
//!
//! The outline is the same 2D heart curve as the mesh, walked at a fine
//! angular step and thinned down to evenly spaced points. Each retained point
//! becomes the translation of one animated superellipsoid instance.

use std::f32::consts::PI;

use cgmath::{MetricSpace, Vector3};

use crate::geometry::heart::heart_curve;

/// Angular step of the curve walk.
const STEP: f32 = 0.01;
/// Half-width of the parameter window skipped around `t = pi`, leaving a
/// visible gap at the heart's top dip.
const GAP_HALF_WIDTH: f32 = 0.08;
/// In-plane scale of the raw curve.
const PLANE_SCALE: f32 = 0.05;
/// Extra scale that pushes the outline away from the central heart mesh.
const OUTLINE_SCALE: f32 = 4.0;
/// Minimum Euclidean distance between consecutive retained points.
pub const MIN_DISTANCE: f32 = 0.4;

/// Sample the heart outline into an ordered list of placement anchors.
///
/// Walks `t` over `[0, 2pi)` in [`STEP`] increments, drops the samples nearest
/// `t = pi`, and keeps a sample only if it lies at least [`MIN_DISTANCE`] from
/// the last kept one (the first sample is always kept). The result is
/// deterministic, irregularly but minimally spaced, and lies in the z = 0
/// plane.
pub fn heart_outline() -> Vec<Vector3<f32>> {
    let mut outline = Vec::new();
    let mut last_point = Vector3::new(0.0, 0.0, 0.0);

    let mut t = 0.0f32;
    while t < 2.0 * PI {
        if (t - PI).abs() < GAP_HALF_WIDTH {
            t += STEP;
            continue;
        }

        let plane = heart_curve(t) * PLANE_SCALE * OUTLINE_SCALE;
        let current = Vector3::new(plane.x, plane.y, 0.0);

        if outline.is_empty() || current.distance(last_point) >= MIN_DISTANCE {
            outline.push(current);
            last_point = current;
        }

        t += STEP;
    }

    outline
}
