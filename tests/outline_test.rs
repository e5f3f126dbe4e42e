use std::f32::consts::PI;

use heartbloom::geometry::heart::heart_curve;
use heartbloom::geometry::outline::{MIN_DISTANCE, heart_outline};
use heartbloom::{MetricSpace, Vector3};

#[test]
fn outline_is_deterministic() {
    assert_eq!(heart_outline(), heart_outline());
}

#[test]
fn outline_points_lie_in_the_z_zero_plane() {
    let outline = heart_outline();
    assert!(outline.len() > 10, "only {} anchors sampled", outline.len());
    assert!(outline.iter().all(|p| p.z == 0.0));
}

#[test]
fn outline_starts_at_the_bottom_of_the_dip_free_walk() {
    // t = 0 maps to (0, 5) on the raw curve; the first sample is always kept.
    let outline = heart_outline();
    let first = outline[0];
    assert!(first.x.abs() < 1e-6);
    assert!((first.y - 1.0).abs() < 1e-6);
}

#[test]
fn no_anchor_comes_from_the_skipped_window_around_the_top_dip() {
    let outline = heart_outline();

    // Re-walk the curve with the walk's own step and scale and collect the
    // samples whose parameter falls inside the skipped window around t = pi.
    // Retained anchors are exact curve samples, so equality is a reliable
    // membership check.
    let mut window = Vec::new();
    let mut t = 0.0f32;
    while t < 2.0 * PI {
        if (t - PI).abs() < 0.08 {
            let plane = heart_curve(t) * 0.05 * 4.0;
            window.push(Vector3::new(plane.x, plane.y, 0.0));
        }
        t += 0.01;
    }
    assert!(!window.is_empty(), "the window covers no samples at this step");

    for anchor in &outline {
        assert!(
            !window.contains(anchor),
            "anchor {anchor:?} was sampled inside the window around t = pi"
        );
    }
}

#[test]
fn consecutive_anchors_respect_the_minimum_spacing() {
    let outline = heart_outline();
    for pair in outline.windows(2) {
        let distance = pair[0].distance(pair[1]);
        assert!(
            distance >= MIN_DISTANCE - 1e-6,
            "anchors {:?} and {:?} are only {distance} apart",
            pair[0],
            pair[1]
        );
    }
}
