//! Motion - the optional animation parameter bag
//!
//! Pattern factories receive one `Motion` as their base animation and may
//! override individual fields per element. Every field is optional so the
//! precedence can be resolved field by field:
//!
//! ```text
//! explicit per-element value  >  factory base value  >  shape default ("off")
//! ```

use serde::{Deserialize, Serialize};

/// Animation parameters, every one optional.
///
/// `None` means "not specified here"; the shape default for every field is
/// "no animation" (zero amplitude, zero speed, random color off).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Motion {
    /// Initial rotation in radians
    pub rotation: Option<f32>,
    /// Radians added to the rotation every tick
    pub rotation_speed: Option<f32>,

    pub amplitude_x: Option<f32>,
    pub frequency_x: Option<f32>,
    pub offset_x: Option<f32>,
    pub amplitude_y: Option<f32>,
    pub frequency_y: Option<f32>,
    pub offset_y: Option<f32>,

    pub amplitude_size: Option<f32>,
    pub frequency_size: Option<f32>,
    pub offset_size: Option<f32>,
    /// Baseline the size oscillates around, if different from the initial size
    pub base_size: Option<f32>,

    pub amplitude_stroke: Option<f32>,
    pub frequency_stroke: Option<f32>,
    pub offset_stroke: Option<f32>,
    /// Baseline the stroke weight oscillates around
    pub base_stroke: Option<f32>,

    pub amplitude_r: Option<f32>,
    pub amplitude_g: Option<f32>,
    pub amplitude_b: Option<f32>,
    pub amplitude_a: Option<f32>,
    pub frequency_color: Option<f32>,
    pub offset_color: Option<f32>,

    pub randomize_color: Option<bool>,
    /// Ticks between random color changes
    pub random_color_interval: Option<u64>,
    /// Seed for reproducible random colors
    pub random_seed: Option<u64>,
}

macro_rules! merge_fields {
    ($this:expr, $base:expr, $($field:ident),+ $(,)?) => {
        Motion {
            $($field: $this.$field.or($base.$field),)+
        }
    };
}

impl Motion {
    /// Empty bag (nothing specified)
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill every unspecified field of `self` from `base`.
    ///
    /// Fields set on `self` always win.
    pub fn or(&self, base: &Motion) -> Motion {
        merge_fields!(
            self,
            base,
            rotation,
            rotation_speed,
            amplitude_x,
            frequency_x,
            offset_x,
            amplitude_y,
            frequency_y,
            offset_y,
            amplitude_size,
            frequency_size,
            offset_size,
            base_size,
            amplitude_stroke,
            frequency_stroke,
            offset_stroke,
            base_stroke,
            amplitude_r,
            amplitude_g,
            amplitude_b,
            amplitude_a,
            frequency_color,
            offset_color,
            randomize_color,
            random_color_interval,
            random_seed,
        )
    }

    /// Add `dx`/`dy` to the position phases (unspecified phases count as 0)
    pub fn shifted(mut self, dx: f32, dy: f32) -> Self {
        self.offset_x = Some(self.offset_x.unwrap_or(0.0) + dx);
        self.offset_y = Some(self.offset_y.unwrap_or(0.0) + dy);
        self
    }

    /// Add `dx` to the horizontal phase only
    pub fn shifted_x(mut self, dx: f32) -> Self {
        self.offset_x = Some(self.offset_x.unwrap_or(0.0) + dx);
        self
    }

    /// Keep only the position oscillators and rotation speed.
    ///
    /// Inner elements of some nested motifs follow their outer element's
    /// movement but none of its size, stroke or color animation.
    pub fn position_only(&self) -> Motion {
        Motion {
            rotation_speed: self.rotation_speed,
            amplitude_x: self.amplitude_x,
            frequency_x: self.frequency_x,
            offset_x: self.offset_x,
            amplitude_y: self.amplitude_y,
            frequency_y: self.frequency_y,
            offset_y: self.offset_y,
            ..Motion::default()
        }
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = Some(rotation);
        self
    }

    pub fn with_rotation_speed(mut self, speed: f32) -> Self {
        self.rotation_speed = Some(speed);
        self
    }

    /// Horizontal sway
    pub fn move_x(mut self, amplitude: f32, frequency: f32, offset: f32) -> Self {
        self.amplitude_x = Some(amplitude);
        self.frequency_x = Some(frequency);
        self.offset_x = Some(offset);
        self
    }

    /// Vertical bob
    pub fn move_y(mut self, amplitude: f32, frequency: f32, offset: f32) -> Self {
        self.amplitude_y = Some(amplitude);
        self.frequency_y = Some(frequency);
        self.offset_y = Some(offset);
        self
    }

    pub fn pulse_size(mut self, amplitude: f32, frequency: f32, offset: f32) -> Self {
        self.amplitude_size = Some(amplitude);
        self.frequency_size = Some(frequency);
        self.offset_size = Some(offset);
        self
    }

    pub fn pulse_stroke(mut self, amplitude: f32, frequency: f32, offset: f32) -> Self {
        self.amplitude_stroke = Some(amplitude);
        self.frequency_stroke = Some(frequency);
        self.offset_stroke = Some(offset);
        self
    }

    /// Rhythmic color with per-channel amplitudes in R, G, B, A order
    pub fn pulse_color(mut self, amplitude: [f32; 4], frequency: f32, offset: f32) -> Self {
        self.amplitude_r = Some(amplitude[0]);
        self.amplitude_g = Some(amplitude[1]);
        self.amplitude_b = Some(amplitude[2]);
        self.amplitude_a = Some(amplitude[3]);
        self.frequency_color = Some(frequency);
        self.offset_color = Some(offset);
        self
    }

    #[cfg(test)]
    pub fn random_color(mut self, interval: u64) -> Self {
        self.randomize_color = Some(true);
        self.random_color_interval = Some(interval);
        self
    }
}
