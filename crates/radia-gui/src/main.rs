//! Radia GUI Application
//!
//! Interactive gradient composer using egui: live color pickers, variant
//! previews, history navigation, and PNG/palette export.

mod app_state;

use app_state::AppState;
use eframe::egui;
use radia_core::color::Rgb;
use radia_core::models::{CanvasSize, Variant};
use radia_core::palette::ColorSlot;
use radia_core::render::Surface;
use radia_core::session::Action;
use radia_core::verbose_println;

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 780.0])
            .with_title("Radia - Gradient Composer"),
        ..Default::default()
    };

    eframe::run_native(
        "Radia",
        options,
        Box::new(|_cc| Ok(Box::new(RadiaApp::default()))),
    )
}

#[derive(Default)]
struct RadiaApp {
    state: AppState,
}

impl eframe::App for RadiaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        // Re-render before the panels draw so they always show the state
        // left by the most recent action
        if self.state.render_needed {
            self.render_and_upload(ctx);
            self.state.render_needed = false;
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Export PNG...").clicked() {
                        self.export_image();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Save Palette...").clicked() {
                        self.save_palette();
                        ui.close_menu();
                    }
                    if ui.button("Load Palette...").clicked() {
                        self.load_palette();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    let mut verbose = radia_core::config::is_verbose();
                    if ui.checkbox(&mut verbose, "Verbose logging").changed() {
                        radia_core::config::set_verbose(verbose);
                    }
                });
            });
        });

        // Left panel: palette and layout controls
        egui::SidePanel::left("controls_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                ui.heading("Controls");
                ui.separator();

                egui::ScrollArea::vertical()
                    .id_salt("controls_scroll")
                    .show(ui, |ui| {
                        self.show_controls(ui);
                    });
            });

        // Central panel: main render plus the three variant previews
        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_canvas(ui);
        });

        // Show error message if any
        if self.state.error_message.is_some() {
            let error = self.state.error_message.clone().unwrap();
            let mut should_close = false;
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        should_close = true;
                    }
                });
            if should_close {
                self.state.error_message = None;
            }
        }
    }
}

impl RadiaApp {
    /// Run one action through the session and flag a repaint if it took
    fn dispatch(&mut self, action: Action) {
        if self.state.session.apply(action, &mut rand::thread_rng()) {
            self.state.render_needed = true;
        }
    }

    /// Global shortcuts: Space for a new random palette (saved to history),
    /// arrow keys for history navigation
    fn handle_keys(&mut self, ctx: &egui::Context) {
        // Leave the keyboard alone while a text field owns it
        if ctx.wants_keyboard_input() {
            return;
        }

        let (space, left, right) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Space),
                i.key_pressed(egui::Key::ArrowLeft),
                i.key_pressed(egui::Key::ArrowRight),
            )
        });

        if space {
            self.dispatch(Action::RandomPalette);
        }
        if left {
            self.dispatch(Action::HistoryBack);
        }
        if right {
            self.dispatch(Action::HistoryForward);
        }
    }

    /// Render the full frame from the current session and upload the main
    /// canvas and all three previews as textures
    fn render_and_upload(&mut self, ctx: &egui::Context) {
        let frame = self.state.session.render_frame();

        verbose_println!(
            "[radia] rendered {} at {} ({} history entries)",
            self.state.session.variant,
            self.state.session.size,
            self.state.session.history.len()
        );

        self.state.main_texture = Some(ctx.load_texture(
            "main_canvas",
            color_image_from_surface(&frame.main),
            Default::default(),
        ));
        for (i, thumb) in frame.thumbnails.iter().enumerate() {
            self.state.thumb_textures[i] = Some(ctx.load_texture(
                format!("thumb_{}", Variant::ALL[i].name()),
                color_image_from_surface(thumb),
                Default::default(),
            ));
        }
        self.state.frame = Some(frame);
    }

    fn show_controls(&mut self, ui: &mut egui::Ui) {
        ui.label("Palette colors:");
        for slot in ColorSlot::ALL {
            let color = self.state.session.palette.get(slot);
            let mut srgb = [color.r, color.g, color.b];
            ui.horizontal(|ui| {
                if ui.color_edit_button_srgb(&mut srgb).changed() {
                    self.dispatch(Action::EditColor {
                        slot,
                        color: Rgb::new(srgb[0], srgb[1], srgb[2]),
                    });
                }
                ui.label(slot.label());
            });
        }

        if ui.button("🎲 Random palette").clicked() {
            self.dispatch(Action::RandomPalette);
        }
        ui.label("(Space does the same)");

        ui.separator();

        ui.label("Composition:");
        ui.horizontal(|ui| {
            for variant in Variant::ALL {
                let selected = self.state.session.variant == variant;
                if ui.selectable_label(selected, variant.name()).clicked() && !selected {
                    self.dispatch(Action::SwitchVariant(variant));
                }
            }
        });

        ui.separator();

        ui.label("History:");
        ui.horizontal(|ui| {
            if ui.button("⬅ Back").clicked() {
                self.dispatch(Action::HistoryBack);
            }
            if ui.button("Forward ➡").clicked() {
                self.dispatch(Action::HistoryForward);
            }
        });
        ui.label(format!(
            "{} saved palette(s)",
            self.state.session.history.len()
        ));

        ui.separator();

        ui.label("Canvas size:");
        let current = self.state.session.size;
        egui::ComboBox::from_id_salt("size_preset")
            .selected_text(current.to_string())
            .show_ui(ui, |ui| {
                for preset in CanvasSize::PRESETS {
                    if ui
                        .selectable_label(current == preset, preset.to_string())
                        .clicked()
                    {
                        self.state.custom_width = preset.width.to_string();
                        self.state.custom_height = preset.height.to_string();
                        self.dispatch(Action::Resize {
                            width: preset.width,
                            height: preset.height,
                        });
                    }
                }
            });

        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.state.custom_width).desired_width(52.0),
            );
            ui.label("x");
            ui.add(
                egui::TextEdit::singleline(&mut self.state.custom_height).desired_width(52.0),
            );
            if ui.button("Apply").clicked() {
                self.apply_custom_size();
            }
        });

        ui.separator();

        if ui.button("💾 Export PNG...").clicked() {
            self.export_image();
        }
        if ui.button("Save palette...").clicked() {
            self.save_palette();
        }
        if ui.button("Load palette...").clicked() {
            self.load_palette();
        }
    }

    /// Apply the custom width/height fields; anything that does not parse
    /// to a positive integer leaves the canvas as it was
    fn apply_custom_size(&mut self) {
        let parsed = (
            self.state.custom_width.trim().parse::<u32>(),
            self.state.custom_height.trim().parse::<u32>(),
        );
        if let (Ok(width), Ok(height)) = parsed {
            self.dispatch(Action::Resize { width, height });
        }
    }

    fn show_canvas(&mut self, ui: &mut egui::Ui) {
        ui.heading("Canvas");
        ui.separator();

        // Reserve a caption-height strip at the bottom for the previews
        let thumb_strip = radia_core::render::THUMBNAIL_SIZE as f32 + 40.0;

        if let Some(ref texture) = self.state.main_texture {
            let size = texture.size_vec2();
            let available = ui.available_size() - egui::vec2(0.0, thumb_strip);

            // Scale to fit while maintaining aspect ratio
            let scale = (available.x / size.x).min(available.y / size.y).min(1.0);
            ui.add(egui::Image::new((texture.id(), size * scale.max(0.05))));
        } else {
            ui.label("Rendering...");
        }

        ui.separator();
        ui.horizontal(|ui| {
            for (i, variant) in Variant::ALL.into_iter().enumerate() {
                let uploaded = self.state.thumb_textures[i]
                    .as_ref()
                    .map(|t| (t.id(), t.size_vec2()));
                if let Some((tex_id, tex_size)) = uploaded {
                    ui.vertical(|ui| {
                        let response = ui.add(
                            egui::Image::new((tex_id, tex_size)).sense(egui::Sense::click()),
                        );
                        if response.clicked() {
                            self.dispatch(Action::SwitchVariant(variant));
                        }
                        let selected = self.state.session.variant == variant;
                        ui.label(if selected {
                            format!("▶ {}", variant.name())
                        } else {
                            variant.name().to_string()
                        });
                    });
                }
            }
        });
    }

    fn export_image(&mut self) {
        let Some(ref frame) = self.state.frame else {
            return;
        };

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG image", &["png"])
            .set_file_name(radia_core::exporters::IMAGE_FILE_NAME)
            .save_file()
        {
            if let Err(e) = radia_core::exporters::export_png(&frame.main, &path) {
                self.state.error_message = Some(format!("Export failed: {}", e));
            }
        }
    }

    fn save_palette(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Palette document", &["json"])
            .set_file_name(radia_core::palette_io::PALETTE_FILE_NAME)
            .save_file()
        {
            if let Err(e) = radia_core::palette_io::save_palette(&self.state.session.palette, &path)
            {
                self.state.error_message = Some(format!("Save failed: {}", e));
            }
        }
    }

    fn load_palette(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Palette document", &["json"])
            .pick_file()
        {
            // A document that fails to parse leaves the live palette alone
            match radia_core::palette_io::load_palette(&path) {
                Ok(palette) => self.dispatch(Action::ReplacePalette(palette)),
                Err(e) => {
                    self.state.error_message = Some(format!("Failed to load palette: {}", e))
                }
            }
        }
    }
}

/// Convert a rendered surface to an egui texture image
fn color_image_from_surface(surface: &Surface) -> egui::ColorImage {
    let pixels = surface
        .data()
        .chunks_exact(3)
        .map(|px| egui::Color32::from_rgb(px[0], px[1], px[2]))
        .collect();

    egui::ColorImage {
        size: [surface.width() as usize, surface.height() as usize],
        pixels,
    }
}
