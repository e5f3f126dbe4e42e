//! The shape-morphing oscillator.

use instant::Duration;

/// Lower bound of the shape exponent.
pub const S_MIN: f32 = 0.1;
/// Upper bound of the shape exponent.
pub const S_MAX: f32 = 2.5;
/// Exponent change applied per tick.
pub const S_STEP: f32 = 0.1;
/// Real-time period between ticks.
pub const TICK: Duration = Duration::from_millis(100);

/// A two-state triangle-wave oscillator for the superellipsoid shape exponent.
///
/// The exponent starts at [`S_MIN`] and walks up in [`S_STEP`] increments once
/// per [`TICK`] of accumulated real time; at [`S_MAX`] it clamps and reverses,
/// at [`S_MIN`] it clamps and reverses again, indefinitely. Accumulating frame
/// deltas decouples the animation rate from the frame rate.
#[derive(Debug, Clone)]
pub struct ShapeOscillator {
    exponent: f32,
    increasing: bool,
    since_tick: Duration,
}

impl ShapeOscillator {
    pub fn new() -> Self {
        Self {
            exponent: S_MIN,
            increasing: true,
            since_tick: Duration::ZERO,
        }
    }

    /// The current shape exponent, always within `[S_MIN, S_MAX]`.
    pub fn exponent(&self) -> f32 {
        self.exponent
    }

    /// Accumulate a frame delta and step the exponent if a tick elapsed.
    ///
    /// Returns the new exponent on ticks where it changed, `None` otherwise.
    /// Callers regenerate the mesh only on `Some`, since the shape is a pure
    /// function of the exponent.
    pub fn advance(&mut self, dt: Duration) -> Option<f32> {
        self.since_tick += dt;
        if self.since_tick < TICK {
            return None;
        }
        self.since_tick = Duration::ZERO;

        if self.increasing {
            self.exponent += S_STEP;
            if self.exponent >= S_MAX {
                self.exponent = S_MAX;
                self.increasing = false;
            }
        } else {
            self.exponent -= S_STEP;
            if self.exponent <= S_MIN {
                self.exponent = S_MIN;
                self.increasing = true;
            }
        }
        Some(self.exponent)
    }
}

impl Default for ShapeOscillator {
    fn default() -> Self {
        Self::new()
    }
}
