// ============================================================================
// TEXT — caption layout + glyph rasterization (font-kit + ab_glyph)
// ============================================================================

use std::sync::OnceLock;

use ab_glyph::{point, Font, FontArc, OutlinedGlyph, PxScale, ScaleFont};

use crate::canvas::Surface;
use crate::color::Color;
use crate::ops::blur::gaussian_blur_mask;

/// Caption glyph size in pixels (bold sans-serif).
pub const CAPTION_SIZE: f32 = 42.0;
/// Baseline anchor: `CAPTION_INSET_X` from the left edge,
/// `CAPTION_INSET_Y` above the bottom edge.
pub const CAPTION_INSET_X: f32 = 32.0;
pub const CAPTION_INSET_Y: f32 = 48.0;
/// Gaussian sigma of the accent glow behind the caption.
pub const GLOW_SIGMA: f32 = 7.0;
/// Placeholder drawn when the caption input is empty.
pub const CAPTION_FALLBACK: &str = "Jouw tekst hier";

static CAPTION_FONT: OnceLock<Option<FontArc>> = OnceLock::new();

/// The caption face, resolved once per process: Inter if installed, then
/// common bold sans-serif fallbacks, then the platform's generic sans.
/// `None` when the system has no usable font; captions are skipped then.
pub fn caption_font() -> Option<&'static FontArc> {
    CAPTION_FONT.get_or_init(load_caption_font).as_ref()
}

fn load_caption_font() -> Option<FontArc> {
    let font = select_bold_sans();
    if font.is_none() {
        crate::log_warn!("no caption font available; captions will be skipped");
    }
    font
}

fn select_bold_sans() -> Option<FontArc> {
    use font_kit::family_name::FamilyName;
    use font_kit::properties::{Properties, Weight};
    use font_kit::source::SystemSource;

    let mut props = Properties::new();
    props.weight = Weight::BOLD;

    let families = [
        FamilyName::Title("Inter".to_string()),
        FamilyName::Title("Arial".to_string()),
        FamilyName::Title("DejaVu Sans".to_string()),
        FamilyName::Title("Liberation Sans".to_string()),
        FamilyName::SansSerif,
    ];

    let handle = SystemSource::new()
        .select_best_match(&families, &props)
        .ok()?;
    let font_data = handle.load().ok()?;
    let font_data_copy = font_data.copy_font_data()?;
    let bytes: Vec<u8> = (*font_data_copy).clone();
    FontArc::try_from_vec(bytes).ok()
}

/// Lay out a single left-aligned line, returning each glyph's x offset from
/// the line origin (kerned) plus the total advance width.
fn layout_line(font: &FontArc, text: &str, size: f32) -> (Vec<(ab_glyph::GlyphId, f32)>, f32) {
    let scaled = font.as_scaled(PxScale::from(size));
    let mut glyphs = Vec::new();
    let mut cursor_x = 0.0f32;
    let mut last: Option<ab_glyph::GlyphId> = None;

    for ch in text.chars() {
        let id = font.glyph_id(ch);
        if let Some(prev) = last {
            cursor_x += scaled.kern(prev, id);
        }
        glyphs.push((id, cursor_x));
        cursor_x += scaled.h_advance(id);
        last = Some(id);
    }

    (glyphs, cursor_x)
}

/// Paint `text` onto the surface: an accent-colored glow (blurred glyph
/// coverage) underneath a white fill, baseline-anchored near the bottom-left
/// corner. Empty input falls back to [`CAPTION_FALLBACK`]. A missing caption
/// font makes this a silent no-op.
pub fn draw_caption(surface: &mut Surface, text: &str, accent: Color) {
    let Some(font) = caption_font() else {
        return;
    };
    let text = if text.is_empty() { CAPTION_FALLBACK } else { text };

    let sw = surface.width() as i32;
    let sh = surface.height() as i32;
    let origin_x = CAPTION_INSET_X;
    let baseline_y = sh as f32 - CAPTION_INSET_Y;

    // Outline every glyph at its final position; whitespace has no outline.
    let (glyphs, _) = layout_line(font, text, CAPTION_SIZE);
    let outlined: Vec<OutlinedGlyph> = glyphs
        .iter()
        .filter_map(|&(id, gx)| {
            let glyph = id.with_scale_and_position(
                PxScale::from(CAPTION_SIZE),
                point(origin_x + gx, baseline_y),
            );
            font.outline_glyph(glyph)
        })
        .collect();
    if outlined.is_empty() {
        return;
    }

    // Mask rectangle: glyph bounds padded by the glow reach, clamped to the
    // surface.
    let reach = (GLOW_SIGMA * 3.0).ceil() + 1.0;
    let mut min_x = f32::MAX;
    let mut min_y = f32::MAX;
    let mut max_x = f32::MIN;
    let mut max_y = f32::MIN;
    for o in &outlined {
        let b = o.px_bounds();
        min_x = min_x.min(b.min.x);
        min_y = min_y.min(b.min.y);
        max_x = max_x.max(b.max.x);
        max_y = max_y.max(b.max.y);
    }
    let x0 = ((min_x - reach).floor() as i32).max(0);
    let y0 = ((min_y - reach).floor() as i32).max(0);
    let x1 = ((max_x + reach).ceil() as i32).min(sw);
    let y1 = ((max_y + reach).ceil() as i32).min(sh);
    if x0 >= x1 || y0 >= y1 {
        return;
    }
    let mw = (x1 - x0) as usize;
    let mh = (y1 - y0) as usize;

    // Glyph coverage mask (max-accumulated, like overlapping strokes of one
    // path).
    let mut mask = vec![0.0f32; mw * mh];
    for o in &outlined {
        let b = o.px_bounds();
        o.draw(|px, py, cov| {
            let ix = b.min.x as i32 + px as i32 - x0;
            let iy = b.min.y as i32 + py as i32 - y0;
            if ix >= 0 && iy >= 0 && (ix as usize) < mw && (iy as usize) < mh {
                let idx = iy as usize * mw + ix as usize;
                mask[idx] = mask[idx].max(cov.clamp(0.0, 1.0));
            }
        });
    }

    // Glow first (accent at blurred coverage), then the white fill on top.
    let glow = gaussian_blur_mask(&mask, mw, mh, GLOW_SIGMA);
    let white = Color::rgb(255, 255, 255);
    for iy in 0..mh {
        for ix in 0..mw {
            let idx = iy * mw + ix;
            let gx = x0 + ix as i32;
            let gy = y0 + iy as i32;
            if glow[idx] > 0.001 {
                surface.blend_pixel(gx, gy, accent, glow[idx]);
            }
            if mask[idx] > 0.001 {
                surface.blend_pixel(gx, gy, white, mask[idx]);
            }
        }
    }
}
