//! Animation module - the numeric core behind every moving attribute
//!
//! This module provides:
//! - `Oscillator` for position, size and stroke modulation
//! - `ColorOscillator` for rhythmic RGBA pulses
//! - `RandomColor` for interval-based random fills

mod color;
mod oscillator;

pub use color::{ColorOscillator, RandomColor, DEFAULT_RANDOM_INTERVAL};
pub use oscillator::{Oscillator, MIN_SIZE, MIN_STROKE};
