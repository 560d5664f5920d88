// ============================================================================
// PadForge application — designer, gallery, staged previews, slideshow
// ============================================================================
//
// Immediate-mode shell around the render core. The designer re-renders its
// preview on every control change; gallery thumbs and photo cards render
// lazily on first display; slideshow frames arrive from background workers
// owned by `Slideshow`.

use eframe::egui;
use egui::{Color32, ColorImage, TextureHandle, TextureOptions};
use image::RgbaImage;
use std::time::{Duration, Instant};

use crate::canvas::{SizeClass, Surface};
use crate::catalog::{self, PatternKind};
use crate::color::Color;
use crate::io::{export_file_name, save_png};
use crate::ops::mockup::render_mockup;
use crate::ops::pattern::{render_pattern, RenderParams};
use crate::slideshow::Slideshow;

pub struct PadForgeApp {
    // Designer state
    params: RenderParams,
    bg_hex: String,
    accent_hex: String,
    /// Set when any control changed; the preview re-renders next frame.
    preview_dirty: bool,
    preview_image: RgbaImage,
    preview_texture: Option<TextureHandle>,

    // Catalog renders (lazy, one texture per entry)
    gallery_textures: Vec<Option<TextureHandle>>,
    card_textures: Vec<Option<TextureHandle>>,

    // Slideshow (background frame renders + rotation)
    show: Slideshow,
    show_textures: Vec<Option<TextureHandle>>,

    /// Outcome of the last export, shown under the download button.
    export_status: Option<String>,
}

impl PadForgeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let params = catalog::default_params();
        let bg_hex = params.background.to_hex();
        let accent_hex = params.accent.to_hex();

        let show = Slideshow::spawn(catalog::photo_items());
        let show_textures = (0..show.item_count()).map(|_| None).collect();

        Self {
            params,
            bg_hex,
            accent_hex,
            preview_dirty: true,
            preview_image: RgbaImage::new(1, 1),
            preview_texture: None,
            gallery_textures: (0..catalog::gallery_items().len()).map(|_| None).collect(),
            card_textures: (0..catalog::photo_items().len()).map(|_| None).collect(),
            show,
            show_textures,
            export_status: None,
        }
    }

    /// Re-render the live preview and replace its texture.
    fn refresh_preview(&mut self, ctx: &egui::Context) {
        let mut surface = Surface::preview(self.params.size);
        render_pattern(&mut surface, &self.params);
        self.preview_image = surface.into_pixels();
        self.preview_texture = Some(ctx.load_texture(
            "designer_preview",
            rgba_to_color_image(&self.preview_image),
            TextureOptions::LINEAR,
        ));
        self.preview_dirty = false;
    }

    fn ensure_gallery_texture(&mut self, ctx: &egui::Context, idx: usize) {
        if self.gallery_textures[idx].is_none() {
            let item = &catalog::gallery_items()[idx];
            let (w, h) = item.size.thumb_dims();
            let mut surface = Surface::new(w, h);
            render_pattern(&mut surface, &item.thumb_params());
            self.gallery_textures[idx] = Some(ctx.load_texture(
                format!("gallery_thumb_{}", idx),
                rgba_to_color_image(surface.pixels()),
                TextureOptions::LINEAR,
            ));
        }
    }

    fn ensure_card_texture(&mut self, ctx: &egui::Context, idx: usize) {
        if self.card_textures[idx].is_none() {
            let item = &catalog::photo_items()[idx];
            let mut surface = Surface::card(item.size);
            render_mockup(&mut surface, item);
            self.card_textures[idx] = Some(ctx.load_texture(
                format!("photo_card_{}", idx),
                rgba_to_color_image(surface.pixels()),
                TextureOptions::LINEAR,
            ));
        }
    }

    fn ensure_show_texture(&mut self, ctx: &egui::Context, idx: usize) {
        if self.show_textures[idx].is_none()
            && let Some(frame) = self.show.frame(idx)
        {
            self.show_textures[idx] = Some(ctx.load_texture(
                format!("slideshow_frame_{}", idx),
                rgba_to_color_image(frame),
                TextureOptions::LINEAR,
            ));
        }
    }

    // ------------------------------------------------------------------
    // Panels
    // ------------------------------------------------------------------

    fn controls_ui(&mut self, ui: &mut egui::Ui) {
        ui.heading("Designer");
        ui.add_space(8.0);

        ui.label("Size");
        ui.horizontal(|ui| {
            for &size in SizeClass::all() {
                if ui
                    .selectable_value(&mut self.params.size, size, size.label())
                    .clicked()
                {
                    self.preview_dirty = true;
                }
            }
        });
        ui.label(
            egui::RichText::new(self.params.size.physical())
                .small()
                .weak(),
        );
        ui.add_space(8.0);

        ui.label("Pattern");
        ui.horizontal(|ui| {
            for &kind in PatternKind::all() {
                if ui
                    .selectable_value(&mut self.params.pattern, kind, kind.key())
                    .clicked()
                {
                    self.preview_dirty = true;
                }
            }
        });
        ui.add_space(8.0);

        ui.label("Background");
        ui.horizontal(|ui| {
            let mut rgb = [
                self.params.background.r,
                self.params.background.g,
                self.params.background.b,
            ];
            if ui.color_edit_button_srgb(&mut rgb).changed() {
                self.params.background = Color::rgb(rgb[0], rgb[1], rgb[2]);
                self.bg_hex = self.params.background.to_hex();
                self.preview_dirty = true;
            }
            // Invalid hex keeps the last valid color; the field keeps the text.
            if ui.text_edit_singleline(&mut self.bg_hex).changed()
                && let Some(c) = Color::from_hex(&self.bg_hex)
            {
                self.params.background = c;
                self.preview_dirty = true;
            }
        });
        ui.add_space(4.0);

        ui.label("Accent");
        ui.horizontal(|ui| {
            let mut rgb = [
                self.params.accent.r,
                self.params.accent.g,
                self.params.accent.b,
            ];
            if ui.color_edit_button_srgb(&mut rgb).changed() {
                self.params.accent = Color::rgb(rgb[0], rgb[1], rgb[2]);
                self.accent_hex = self.params.accent.to_hex();
                self.preview_dirty = true;
            }
            if ui.text_edit_singleline(&mut self.accent_hex).changed()
                && let Some(c) = Color::from_hex(&self.accent_hex)
            {
                self.params.accent = c;
                self.preview_dirty = true;
            }
        });
        ui.add_space(8.0);

        ui.label("Caption");
        if ui.text_edit_singleline(&mut self.params.caption).changed() {
            self.preview_dirty = true;
        }
        ui.label(egui::RichText::new("Leave empty for placeholder text").small().weak());
        ui.add_space(12.0);

        if ui.button("⬇ Download mockup").clicked() {
            self.export_preview();
        }
        if let Some(status) = &self.export_status {
            ui.add_space(4.0);
            ui.label(egui::RichText::new(status).small());
        }
    }

    /// Native save dialog for the current preview, then PNG export.
    fn export_preview(&mut self) {
        let file_name = export_file_name(self.params.size);
        let dialog = rfd::FileDialog::new()
            .set_file_name(&file_name)
            .add_filter("PNG Image", &["png"]);
        if let Some(path) = dialog.save_file() {
            match save_png(&self.preview_image, &path) {
                Ok(()) => {
                    crate::log_info!("exported preview to {}", path.display());
                    self.export_status = Some(format!("Saved {}", path.display()));
                }
                Err(e) => {
                    crate::log_err!("export failed: {}", e);
                    self.export_status = Some(format!("Export failed: {}", e));
                }
            }
        }
    }

    fn preview_ui(&mut self, ui: &mut egui::Ui) {
        ui.heading("Live preview");
        ui.add_space(4.0);
        if let Some(tex) = &self.preview_texture {
            texture_fit(ui, tex, ui.available_width().min(640.0));
        }
    }

    fn gallery_ui(&mut self, ui: &mut egui::Ui) {
        ui.heading("Gallery");
        ui.add_space(4.0);
        let ctx = ui.ctx().clone();
        ui.horizontal_wrapped(|ui| {
            for (idx, item) in catalog::gallery_items().iter().enumerate() {
                self.ensure_gallery_texture(&ctx, idx);
                if let Some(tex) = &self.gallery_textures[idx] {
                    ui.vertical(|ui| {
                        texture_fit(ui, tex, 220.0);
                        ui.label(item.title);
                        ui.label(
                            egui::RichText::new(item.size.physical()).small().weak(),
                        );
                    });
                }
            }
        });
    }

    fn cards_ui(&mut self, ui: &mut egui::Ui) {
        ui.heading("Staged previews");
        ui.add_space(4.0);
        let ctx = ui.ctx().clone();
        ui.horizontal_wrapped(|ui| {
            for (idx, item) in catalog::photo_items().iter().enumerate() {
                self.ensure_card_texture(&ctx, idx);
                if let Some(tex) = &self.card_textures[idx] {
                    ui.vertical(|ui| {
                        texture_fit(ui, tex, 300.0);
                        ui.label(item.title);
                        ui.label(
                            egui::RichText::new(item.style.key()).small().weak(),
                        );
                    });
                }
            }
        });
    }

    fn slideshow_ui(&mut self, ui: &mut egui::Ui) {
        ui.heading("Slideshow");
        ui.add_space(4.0);

        let ctx = ui.ctx().clone();
        let current = self.show.current_index();
        self.ensure_show_texture(&ctx, current);

        let max_w = ui.available_width().min(900.0);
        if let Some(tex) = &self.show_textures[current] {
            texture_fit(ui, tex, max_w);
        } else {
            // Frame still rendering — skeleton with a spinner.
            let (w, h) = crate::canvas::FRAME_DIMS;
            let display = egui::vec2(max_w, max_w * h as f32 / w as f32);
            let (rect, _) = ui.allocate_exact_size(display, egui::Sense::hover());
            ui.painter().rect_filled(rect, 8.0, Color32::from_gray(35));
            ui.put(rect, egui::Spinner::new());
        }

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui.small_button("\u{23EA}").clicked() {
                self.show.prev();
            }
            for idx in 0..self.show.item_count() {
                let dot = if idx == self.show.current_index() {
                    "\u{25CF}"
                } else {
                    "\u{25CB}"
                };
                if ui.small_button(dot).clicked() {
                    self.show.select(idx);
                }
            }
            if ui.small_button("\u{23E9}").clicked() {
                self.show.next();
            }
            if let Some(item) = self.show.current_item() {
                ui.label(item.title);
            }
        });
    }
}

impl eframe::App for PadForgeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // --- Poll slideshow frame renders + rotation timer ---
        let now = Instant::now();
        self.show.poll();
        self.show.advance_if_due(now);
        if self.show.ready_count() < self.show.item_count() {
            ctx.request_repaint_after(Duration::from_millis(100));
        } else {
            ctx.request_repaint_after(self.show.until_rotation(now));
        }

        // --- Re-render the designer preview when a control changed ---
        if self.preview_dirty {
            self.refresh_preview(ctx);
        }

        egui::SidePanel::left("designer_controls")
            .resizable(false)
            .default_width(260.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                self.controls_ui(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.preview_ui(ui);
                ui.add_space(16.0);
                ui.separator();
                self.gallery_ui(ui);
                ui.add_space(16.0);
                ui.separator();
                self.cards_ui(ui);
                ui.add_space(16.0);
                ui.separator();
                self.slideshow_ui(ui);
                ui.add_space(24.0);
            });
        });
    }
}

/// Copy an RGBA render into an egui texture image.
fn rgba_to_color_image(img: &RgbaImage) -> ColorImage {
    let size = [img.width() as usize, img.height() as usize];
    let pixels: Vec<Color32> = img
        .pixels()
        .map(|p| Color32::from_rgba_unmultiplied(p[0], p[1], p[2], p[3]))
        .collect();
    ColorImage { size, pixels }
}

/// Draw a texture scaled to fit `max_w`, preserving aspect ratio.
fn texture_fit(ui: &mut egui::Ui, tex: &TextureHandle, max_w: f32) -> egui::Response {
    let size = tex.size_vec2();
    let scale = (max_w / size.x).min(1.0);
    let display = size * scale;
    let (rect, response) = ui.allocate_exact_size(display, egui::Sense::hover());
    ui.painter().image(
        tex.id(),
        rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        Color32::WHITE,
    );
    response
}
