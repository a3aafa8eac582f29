//! Player - drives one sketch through its lifecycle
//!
//! ```text
//! Idle --start--> Running <--pause/resume--> Paused
//!   \                 \                        /
//!    `-----------------`------dispose---------'--> Disposed
//! ```
//!
//! The host calls [`Player::frame`] once per display frame. Only a running
//! player advances its tick and asks the sketch to draw; a paused one leaves
//! the surface and every shape exactly as they were.

use super::{Assets, Sketch};
use crate::render::Surface;

/// Lifecycle state of a [`Player`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayState {
    Idle,
    Running,
    Paused,
    Disposed,
}

/// Owns a sketch and its frame clock
pub struct Player {
    sketch: Option<Box<dyn Sketch>>,
    state: PlayState,
    tick: u64,

    /// Status message for the UI
    pub status: String,
}

impl Player {
    pub fn new(sketch: Box<dyn Sketch>) -> Self {
        let status = format!("{} ready", sketch.name());
        Self {
            sketch: Some(sketch),
            state: PlayState::Idle,
            tick: 0,
            status,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> PlayState {
        self.state
    }

    /// Ticks drawn so far
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn is_running(&self) -> bool {
        self.state == PlayState::Running
    }

    /// Name of the sketch, empty once disposed
    pub fn sketch_name(&self) -> &str {
        self.sketch.as_ref().map(|s| s.name()).unwrap_or("")
    }

    /// Set the sketch up against `surface` and start running
    pub fn start(&mut self, surface: &mut dyn Surface, assets: &Assets) {
        if self.state != PlayState::Idle {
            log::debug!("Ignoring start while {:?}", self.state);
            return;
        }
        let Some(sketch) = self.sketch.as_mut() else {
            return;
        };

        log::info!(
            "Starting sketch {} on {}x{}",
            sketch.name(),
            surface.width(),
            surface.height()
        );
        sketch.setup(surface, assets);
        self.state = PlayState::Running;
        self.status = format!("Playing {}", sketch.name());
    }

    /// Draw the next frame if running. Returns whether anything was drawn.
    pub fn frame(&mut self, surface: &mut dyn Surface) -> bool {
        if self.state != PlayState::Running {
            return false;
        }
        let Some(sketch) = self.sketch.as_mut() else {
            return false;
        };
        self.tick += 1;
        sketch.draw(surface, self.tick);
        true
    }

    pub fn pause(&mut self) {
        if self.state != PlayState::Running {
            log::debug!("Ignoring pause while {:?}", self.state);
            return;
        }
        self.state = PlayState::Paused;
        self.status = format!("Paused at tick {}", self.tick);
        log::info!("Paused {} at tick {}", self.sketch_name(), self.tick);
    }

    pub fn resume(&mut self) {
        if self.state != PlayState::Paused {
            log::debug!("Ignoring resume while {:?}", self.state);
            return;
        }
        self.state = PlayState::Running;
        self.status = format!("Playing {}", self.sketch_name());
        log::info!("Resumed {}", self.sketch_name());
    }

    /// Follow the host's run flag
    pub fn set_running(&mut self, running: bool) {
        match (running, self.state) {
            (true, PlayState::Paused) => self.resume(),
            (false, PlayState::Running) => self.pause(),
            _ => {}
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        match (self.state, self.sketch.as_mut()) {
            (PlayState::Disposed, _) | (_, None) => {
                log::debug!("Ignoring resize after dispose");
            }
            (_, Some(sketch)) => sketch.resize(width, height),
        }
    }

    /// Run the sketch's setup again on a reallocated surface.
    ///
    /// The clock and the running state carry over; an idle or disposed
    /// player is left alone.
    pub fn restage(&mut self, surface: &mut dyn Surface, assets: &Assets) {
        if !matches!(self.state, PlayState::Running | PlayState::Paused) {
            log::debug!("Ignoring restage while {:?}", self.state);
            return;
        }
        if let Some(sketch) = self.sketch.as_mut() {
            log::info!(
                "Restaging {} on {}x{}",
                sketch.name(),
                surface.width(),
                surface.height()
            );
            sketch.setup(surface, assets);
        }
    }

    /// Drop the sketch and everything it holds. Terminal.
    pub fn dispose(&mut self) {
        if self.state == PlayState::Disposed {
            log::debug!("Ignoring dispose, already disposed");
            return;
        }
        if let Some(sketch) = self.sketch.take() {
            log::info!("Disposing {} after {} ticks", sketch.name(), self.tick);
        }
        self.state = PlayState::Disposed;
        self.status = "Stopped".to_string();
    }
}

impl Drop for Player {
    fn drop(&mut self) {
        self.dispose();
    }
}
