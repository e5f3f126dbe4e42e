use std::time::Duration;

use heartbloom::animation::{S_MAX, S_MIN, ShapeOscillator, TICK};

#[test]
fn oscillator_starts_at_the_lower_bound() {
    let oscillator = ShapeOscillator::new();
    assert_eq!(oscillator.exponent(), S_MIN);
}

#[test]
fn sub_tick_deltas_accumulate_without_stepping() {
    let mut oscillator = ShapeOscillator::new();

    assert_eq!(oscillator.advance(Duration::from_millis(40)), None);
    assert_eq!(oscillator.advance(Duration::from_millis(40)), None);
    assert_eq!(oscillator.exponent(), S_MIN);

    // The third delta crosses the tick boundary.
    let stepped = oscillator.advance(Duration::from_millis(40));
    assert!(stepped.is_some());
    assert!(oscillator.exponent() > S_MIN);
}

#[test]
fn oscillator_sweeps_between_exact_bounds_without_overshoot() {
    let mut oscillator = ShapeOscillator::new();

    let mut reached_max = false;
    let mut returned_to_min = false;
    // A full up-down sweep takes 48 ticks; leave room for a second one.
    for _ in 0..120 {
        let s = oscillator
            .advance(TICK)
            .expect("a full tick always steps the exponent");
        assert!((S_MIN..=S_MAX).contains(&s), "exponent {s} left its bounds");

        if s == S_MAX {
            reached_max = true;
        }
        if reached_max && s == S_MIN {
            returned_to_min = true;
        }
    }
    assert!(reached_max, "never clamped to the exact upper bound");
    assert!(returned_to_min, "never clamped back to the exact lower bound");
}

#[test]
fn oscillator_reverses_at_the_top() {
    let mut oscillator = ShapeOscillator::new();

    // Drive it until the upper clamp fires.
    let mut s = oscillator.exponent();
    for _ in 0..60 {
        s = oscillator.advance(TICK).unwrap();
        if s == S_MAX {
            break;
        }
    }
    assert_eq!(s, S_MAX);

    let after_peak = oscillator.advance(TICK).unwrap();
    assert!(after_peak < S_MAX);
}
