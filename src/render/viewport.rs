//! Canvas viewport widget
//!
//! Shows a [`Canvas`] inside an egui panel. The pixel buffer is uploaded to
//! a GPU texture each frame and drawn letterboxed into the available space.
//! The canvas keeps its own pixel size; the widget only scales the texture.

use eframe::egui::{self, Color32, ColorImage, Pos2, Rect, Stroke, TextureHandle, TextureOptions, Vec2};

use super::canvas::Canvas;

/// Display settings for the viewport
#[derive(Clone, Debug)]
pub struct ViewportSettings {
    /// Color around the letterboxed canvas
    pub letterbox: Color32,

    /// Never scale the canvas above 1:1
    pub limit_to_native: bool,

    /// Outline the canvas edge
    pub show_border: bool,

    /// Nearest-neighbour upscaling instead of linear
    pub pixelated: bool,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            letterbox: Color32::from_rgb(24, 24, 24),
            limit_to_native: true,
            show_border: false,
            pixelated: false,
        }
    }
}

/// Texture-backed canvas display
pub struct Viewport {
    /// Display settings
    pub settings: ViewportSettings,

    texture: Option<TextureHandle>,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    pub fn new() -> Self {
        Self::with_settings(ViewportSettings::default())
    }

    pub fn with_settings(settings: ViewportSettings) -> Self {
        Self {
            settings,
            texture: None,
        }
    }

    /// Largest rect with the canvas aspect ratio that fits in `available`
    pub fn fit(&self, canvas_size: Vec2, available: Rect) -> Rect {
        if canvas_size.x <= 0.0 || canvas_size.y <= 0.0 {
            return Rect::from_center_size(available.center(), Vec2::ZERO);
        }
        let mut scale = (available.width() / canvas_size.x).min(available.height() / canvas_size.y);
        if self.settings.limit_to_native {
            scale = scale.min(1.0);
        }
        Rect::from_center_size(available.center(), canvas_size * scale.max(0.0))
    }

    /// Upload the canvas and draw it
    pub fn show(&mut self, ui: &mut egui::Ui, canvas: &Canvas) -> egui::Response {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
        let rect = response.rect;

        painter.rect_filled(rect, 0.0, self.settings.letterbox);

        let (w, h) = canvas.size();
        let image = ColorImage::from_rgba_premultiplied([w as usize, h as usize], canvas.pixels());
        let options = if self.settings.pixelated {
            TextureOptions::NEAREST
        } else {
            TextureOptions::LINEAR
        };

        let texture = match self.texture.take() {
            Some(mut texture) => {
                texture.set(image, options);
                texture
            }
            None => ui.ctx().load_texture("mandala-canvas", image, options),
        };

        let target = self.fit(Vec2::new(w as f32, h as f32), rect);
        let uv = Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));
        painter.image(texture.id(), target, uv, Color32::WHITE);
        self.texture = Some(texture);

        if self.settings.show_border {
            painter.rect_stroke(target, 0.0, Stroke::new(1.0, Color32::from_gray(90)));
        }

        response
    }

    /// Forget the uploaded texture, e.g. after the canvas was reallocated
    pub fn reset(&mut self) {
        self.texture = None;
    }
}
