//! mandala-rs - Generative mandala sketches
//!
//! Animated artworks built from oscillating primitive shapes, composed into
//! symmetric faces, pillars and circle fields.
//!
//! ## Layout
//! - `animation`: oscillators and color modulation
//! - `shapes`: the animated shape entity, its config and the scene
//! - `patterns`: motif factories (eyes, mouths, pillars, grids...)
//! - `render`: the drawing surface, a software canvas and its viewport
//! - `sketches`: complete artworks and the player that runs them
//! - `settings`: persisted application settings

use std::path::PathBuf;

use eframe::egui;

mod animation;
mod patterns;
mod render;
mod settings;
mod shapes;
mod sketches;

use render::{Canvas, Viewport};
use settings::AppSettings;
use sketches::{Assets, FirstImage, Player, SketchFile, SketchKind};

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting mandala-rs");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 760.0])
            .with_title("mandala-rs"),
        ..Default::default()
    };

    eframe::run_native(
        "mandala-rs",
        options,
        Box::new(|cc| Ok(Box::new(MandalaApp::new(cc)))),
    )
}

/// Main application state
struct MandalaApp {
    canvas: Canvas,
    viewport: Viewport,
    player: Player,
    assets: Assets,

    sketch_kind: SketchKind,
    custom_path: Option<PathBuf>,
    running: bool,
    show_settings: bool,

    // Canvas size being edited in the settings panel
    pending_size: (u32, u32),

    /// Last sketch load failure, shown in the side panel
    error: Option<String>,
    settings_dirty: bool,
}

impl MandalaApp {
    fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let defaults = AppSettings::default();
        let (width, height) = defaults.canvas_size();
        let mut app = Self {
            canvas: Canvas::new(width, height),
            viewport: Viewport::new(),
            player: Player::new(Box::new(FirstImage::new())),
            assets: Assets::none(),
            sketch_kind: defaults.sketch,
            custom_path: None,
            running: defaults.running,
            show_settings: defaults.show_settings,
            pending_size: (width, height),
            error: None,
            settings_dirty: false,
        };

        AppSettings::load().apply(&mut app);
        app.pending_size = app.canvas.size();
        app.restart();
        app
    }

    /// Build the selected sketch from scratch and start it on a clean canvas
    fn restart(&mut self) {
        let sketch = match self.sketch_kind.create(self.custom_path.as_deref()) {
            Ok(sketch) => {
                self.error = None;
                sketch
            }
            Err(e) => {
                log::error!("Failed to create {}: {}", self.sketch_kind.name(), e);
                self.error = Some(e.to_string());
                Box::new(FirstImage::new())
            }
        };

        let (width, height) = self.canvas.size();
        self.canvas = Canvas::new(width, height);
        self.viewport.reset();

        // The old player disposes its sketch when dropped
        self.player = Player::new(sketch);
        self.player.start(&mut self.canvas, &self.assets);
        self.player.set_running(self.running);
    }

    fn select_sketch(&mut self, kind: SketchKind) {
        self.sketch_kind = kind;
        self.settings_dirty = true;
        self.restart();
    }

    fn resize_canvas(&mut self, width: u32, height: u32) {
        let (width, height) = (width.max(1), height.max(1));
        if (width, height) == self.canvas.size() {
            return;
        }
        log::info!("Resizing canvas to {}x{}", width, height);
        self.canvas.resize(width, height);
        self.viewport.reset();
        self.player.resize(width as f32, height as f32);
        // The new buffer is transparent; let the sketch lay out and paint again
        self.player.restage(&mut self.canvas, &self.assets);
        self.settings_dirty = true;
    }

    /// Write a starter sketch file to `path` and open it
    fn create_sketch_file(&mut self, path: PathBuf) {
        match SketchFile::starter().save(&path) {
            Ok(()) => {
                log::info!("Created sketch file {}", path.display());
                self.custom_path = Some(path);
                self.select_sketch(SketchKind::Custom);
            }
            Err(e) => {
                log::error!("Failed to create {}: {}", path.display(), e);
                self.error = Some(e.to_string());
            }
        }
    }

    fn toggle_running(&mut self) {
        self.running = !self.running;
        self.player.set_running(self.running);
        self.settings_dirty = true;
    }

    fn settings_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Sketch");
        ui.separator();

        let mut selected = self.sketch_kind;
        egui::ComboBox::from_label("Artwork")
            .selected_text(selected.name())
            .show_ui(ui, |ui| {
                for kind in SketchKind::all() {
                    ui.selectable_value(&mut selected, *kind, kind.name());
                }
            });
        if selected != self.sketch_kind {
            self.select_sketch(selected);
        }

        if ui.button("⟲ Restart").clicked() {
            self.restart();
        }

        if let Some(error) = &self.error {
            ui.colored_label(egui::Color32::from_rgb(230, 90, 90), error.as_str());
        }

        ui.separator();

        ui.collapsing("Files", |ui| {
            let asset_label = self
                .assets
                .dir()
                .map(|d| d.display().to_string())
                .unwrap_or_else(|| "assets (default)".to_string());
            ui.label(format!("Assets: {}", asset_label));
            if ui.button("Choose asset folder...").clicked() {
                if let Some(dir) = rfd::FileDialog::new().pick_folder() {
                    log::info!("Asset folder set to {}", dir.display());
                    self.assets = Assets::new(dir);
                    self.settings_dirty = true;
                    self.restart();
                }
            }

            ui.separator();

            let custom_label = self
                .custom_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "none".to_string());
            ui.label(format!("Custom sketch: {}", custom_label));
            if ui.button("Open sketch file...").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Sketch", &["json"])
                    .pick_file()
                {
                    self.custom_path = Some(path);
                    self.select_sketch(SketchKind::Custom);
                }
            }
            if ui.button("New sketch file...").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Sketch", &["json"])
                    .set_file_name("sketch.json")
                    .save_file()
                {
                    self.create_sketch_file(path);
                }
            }
        });

        ui.collapsing("Canvas", |ui| {
            ui.horizontal(|ui| {
                ui.add(egui::DragValue::new(&mut self.pending_size.0).range(16..=4096).suffix(" px"));
                ui.label("x");
                ui.add(egui::DragValue::new(&mut self.pending_size.1).range(16..=4096).suffix(" px"));
            });
            if ui.button("Apply size").clicked() {
                let (w, h) = self.pending_size;
                self.resize_canvas(w, h);
            }
        });

        ui.collapsing("Display", |ui| {
            let settings = &mut self.viewport.settings;
            let mut changed = false;
            changed |= ui.checkbox(&mut settings.limit_to_native, "Never upscale").changed();
            changed |= ui.checkbox(&mut settings.pixelated, "Pixelated").changed();
            changed |= ui.checkbox(&mut settings.show_border, "Show border").changed();
            if changed {
                self.settings_dirty = true;
            }
        });
    }
}

impl eframe::App for MandalaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.request_repaint();

        // Top panel
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("mandala-rs");
                ui.separator();

                let button_text = if self.player.is_running() {
                    "⏸ Pause"
                } else {
                    "▶ Play"
                };
                if ui.button(button_text).clicked() {
                    self.toggle_running();
                }

                ui.separator();
                if ui.toggle_value(&mut self.show_settings, "⚙ Settings").changed() {
                    self.settings_dirty = true;
                }
                ui.separator();
                ui.label(&self.player.status);
            });
        });

        // Settings panel
        if self.show_settings {
            egui::SidePanel::left("settings_panel")
                .min_width(220.0)
                .show(ctx, |ui| self.settings_panel(ui));
        }

        // Advance the sketch, then show the canvas
        self.canvas.begin_frame();
        self.player.frame(&mut self.canvas);
        self.canvas.flush();

        egui::CentralPanel::default().show(ctx, |ui| {
            self.viewport.show(ui, &self.canvas);

            ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
                ui.horizontal(|ui| {
                    let (w, h) = self.canvas.size();
                    ui.small(format!("Sketch: {}", self.player.sketch_name()));
                    ui.separator();
                    ui.small(format!("Tick: {}", self.player.tick()));
                    ui.separator();
                    ui.small(format!("Canvas: {}x{}", w, h));
                });
            });
        });

        if self.settings_dirty {
            AppSettings::from_app(self).save();
            self.settings_dirty = false;
        }
    }
}
