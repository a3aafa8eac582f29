//! Color modulation
//!
//! Two modes drive a shape's fill color:
//! - [`ColorOscillator`]: one shared frequency/phase pulses all four channels,
//!   with fixed per-channel phase spread so the channels do not pulse in unison
//! - [`RandomColor`]: resample a random color every `interval` ticks and hold
//!   it in between

use std::f32::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::oscillator::sine_at;
use crate::shapes::Rgba;

/// Extra phase per channel, in R, G, B, A order
pub const CHANNEL_SPREAD: [f32; 4] = [0.0, PI / 3.0, 2.0 * PI / 3.0, 0.0];

/// Default resampling interval for random color mode
pub const DEFAULT_RANDOM_INTERVAL: u64 = 60;

/// Rhythmic RGBA pulse
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ColorOscillator {
    /// Per-channel amplitude (R, G, B, A)
    pub amplitude: [f32; 4],
    /// Shared frequency for every channel
    pub frequency: f32,
    /// Shared phase offset
    pub phase: f32,
}

impl ColorOscillator {
    /// Active when any channel amplitude or the frequency is non-zero
    pub fn is_active(&self) -> bool {
        self.frequency != 0.0 || self.amplitude.iter().any(|a| *a != 0.0)
    }

    /// Pulse `base` at `tick`, clamping every channel to 0..=255.
    ///
    /// Callers check [`is_active`](Self::is_active) first; an inactive
    /// oscillator would still return a clamped copy of `base`.
    pub fn apply(&self, base: Rgba, tick: u64) -> Rgba {
        let base = base.to_array();
        let mut out = [0.0; 4];
        for (i, channel) in out.iter_mut().enumerate() {
            let wave = sine_at(tick, self.frequency, self.phase + CHANNEL_SPREAD[i]);
            *channel = (base[i] + self.amplitude[i] * wave).clamp(0.0, 255.0);
        }
        Rgba::from_array(out)
    }
}

/// Random color resampler.
///
/// Holds the last chosen color between resampling ticks; the color only
/// changes on ticks that are a multiple of `interval`, and never twice for
/// the same tick.
#[derive(Clone, Debug)]
pub struct RandomColor {
    interval: u64,
    last_change: u64,
    rng: StdRng,
}

impl RandomColor {
    /// Create a resampler. An `interval` of 0 behaves like 1.
    ///
    /// With `seed` the sequence of colors is reproducible; without one the
    /// generator is seeded from the OS.
    pub fn new(interval: u64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            interval: interval.max(1),
            last_change: 0,
            rng,
        }
    }

    /// Resampling interval in ticks
    #[cfg(test)]
    pub fn interval(&self) -> u64 {
        self.interval
    }

    /// Tick at which the color last changed (0 before the first change)
    #[cfg(test)]
    pub fn last_change(&self) -> u64 {
        self.last_change
    }

    /// Returns a fresh color if `tick` is a resampling tick, `None` otherwise
    pub fn update(&mut self, tick: u64) -> Option<Rgba> {
        if tick % self.interval != 0 || tick == self.last_change {
            return None;
        }
        self.last_change = tick;
        Some(Rgba::new(
            self.rng.random_range(0.0..255.0),
            self.rng.random_range(0.0..255.0),
            self.rng.random_range(0.0..255.0),
            self.rng.random_range(50.0..255.0),
        ))
    }
}
