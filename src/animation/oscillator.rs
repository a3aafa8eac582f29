//! Oscillator - tick-driven sine modulation
//!
//! Every animated shape attribute is a baseline plus a bounded sine offset:
//!
//! ```text
//! value(t) = baseline + amplitude * sin(t * frequency + phase)
//! ```
//!
//! `t` is the integer frame tick handed down by the sketch player. Frequency
//! and phase are free real numbers; large or negative values are common and
//! are never normalized.

use serde::{Deserialize, Serialize};

/// Smallest size a shape may shrink to while its size oscillates
pub const MIN_SIZE: f32 = 1.0;

/// Smallest stroke weight while the stroke oscillates
pub const MIN_STROKE: f32 = 0.0;

/// Raw sine term for a tick.
///
/// The angle is evaluated in `f64` so that long-running sketches (millions of
/// ticks) keep their phase relationships stable.
pub fn sine_at(tick: u64, frequency: f32, phase: f32) -> f32 {
    ((tick as f64) * f64::from(frequency) + f64::from(phase)).sin() as f32
}

/// A single sine oscillator
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Oscillator {
    /// Peak deviation from the baseline
    pub amplitude: f32,
    /// Radians advanced per tick
    pub frequency: f32,
    /// Phase offset in radians
    pub phase: f32,
}

impl Oscillator {
    /// Create an oscillator
    pub fn new(amplitude: f32, frequency: f32, phase: f32) -> Self {
        Self {
            amplitude,
            frequency,
            phase,
        }
    }

    /// An oscillator only drives its attribute when the amplitude is positive.
    /// Zero or negative amplitudes leave the baseline untouched.
    pub fn is_active(&self) -> bool {
        self.amplitude > 0.0
    }

    /// Signed offset from the baseline at `tick`
    pub fn offset(&self, tick: u64) -> f32 {
        self.amplitude * sine_at(tick, self.frequency, self.phase)
    }

    /// Modulated value, or exactly `baseline` when inactive
    pub fn apply(&self, baseline: f32, tick: u64) -> f32 {
        if self.is_active() {
            baseline + self.offset(tick)
        } else {
            baseline
        }
    }

    /// Modulated value floored at `min`, or exactly `baseline` when inactive
    pub fn apply_floored(&self, baseline: f32, tick: u64, min: f32) -> f32 {
        if self.is_active() {
            (baseline + self.offset(tick)).max(min)
        } else {
            baseline
        }
    }
}
