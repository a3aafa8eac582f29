//! Render module - drawing surfaces and display
//!
//! This module provides:
//! - `Surface`, the immediate-mode drawing API shapes render through
//! - `Canvas`, a `vello_cpu` raster implementation of it
//! - `Viewport`, the egui widget that shows a canvas

mod canvas;
mod surface;
mod viewport;

#[cfg(test)]
pub mod recorder;

pub use canvas::Canvas;
pub use surface::Surface;
pub use viewport::{Viewport, ViewportSettings};
