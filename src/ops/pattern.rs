// ============================================================================
// PATTERN — procedural pad designs: gradient base, texture layer, caption
// ============================================================================
//
// The pattern is the artwork that ends up printed on the pad. It is drawn
// the same way at every resolution: a diagonal two-stop gradient, one of
// three accent textures at fixed 25% opacity, and a glowing caption near
// the bottom-left corner.

use rayon::prelude::*;

use crate::canvas::{SizeClass, Surface};
use crate::catalog::PatternKind;
use crate::color::Color;
use crate::ops::geometry::{coverage, sdf_circle, sdf_segment, stroke_coverage};
use crate::ops::text;

/// Fixed dark endpoint of the background gradient.
pub const GRADIENT_DARK: Color = Color::rgb(0x0f, 0x17, 0x2a);
/// Opacity of every pattern texture element.
pub const PATTERN_ALPHA: f32 = 0.25;

const WAVE_STEP: f32 = 24.0; // band spacing, and sample step along a band
const WAVE_AMPLITUDE: f32 = 8.0;
const WAVE_PERIOD: f32 = 40.0;
const DOT_STEP: f32 = 24.0;
const DOT_OFFSET: f32 = 12.0;
const DOT_RADIUS: f32 = 2.0;
const GRID_STEP: f32 = 28.0;
const STROKE_WIDTH: f32 = 1.0;

/// Immutable inputs of one pattern render. `size` picks the surface
/// dimensions at the call site; the painter itself only reads the surface.
#[derive(Clone, Debug)]
pub struct RenderParams {
    pub background: Color,
    pub accent: Color,
    pub pattern: PatternKind,
    pub caption: String,
    pub size: SizeClass,
}

/// Fully repaint `surface` with the pattern described by `params`. Prior
/// content does not survive: the gradient pass writes every pixel.
pub fn render_pattern(surface: &mut Surface, params: &RenderParams) {
    surface.clear();
    fill_diagonal_gradient(surface, params.background, GRADIENT_DARK);

    match params.pattern {
        PatternKind::Waves => draw_waves(surface, params.accent),
        PatternKind::Dots => draw_dots(surface, params.accent),
        PatternKind::Grid => draw_grid(surface, params.accent),
    }

    text::draw_caption(surface, &params.caption, params.accent);
}

/// Opaque linear gradient from `from` at (0,0) to `to` at (w,h),
/// row-parallel. The gradient axis is the surface diagonal; `t` is the
/// projection of the pixel center onto it.
fn fill_diagonal_gradient(surface: &mut Surface, from: Color, to: Color) {
    let w = surface.width() as usize;
    let fw = surface.width() as f32;
    let fh = surface.height() as f32;
    let inv_len_sq = 1.0 / (fw * fw + fh * fh);
    let stride = w * 4;

    surface
        .raw_mut()
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row)| {
            let fy = y as f32 + 0.5;
            for x in 0..w {
                let fx = x as f32 + 0.5;
                let t = ((fx * fw + fy * fh) * inv_len_sq).clamp(0.0, 1.0);
                let c = from.lerp(to, t);
                let pi = x * 4;
                row[pi] = c.r;
                row[pi + 1] = c.g;
                row[pi + 2] = c.b;
                row[pi + 3] = 255;
            }
        });
}

/// Horizontal wave bands: one polyline per band at y = 0, 24, 48, …,
/// sampled every 24px with a sine offset of amplitude 8 driven by (x + y).
fn draw_waves(surface: &mut Surface, accent: Color) {
    let w = surface.width() as f32;
    let h = surface.height() as f32;

    let mut band_y = 0.0f32;
    while band_y < h {
        let mut pts = Vec::new();
        let mut x = 0.0f32;
        while x <= w {
            let yy = band_y + ((x + band_y) / WAVE_PERIOD).sin() * WAVE_AMPLITUDE;
            pts.push((x, yy));
            x += WAVE_STEP;
        }
        stroke_polyline(surface, &pts, accent, PATTERN_ALPHA);
        band_y += WAVE_STEP;
    }
}

/// Filled accent dots on a 24px lattice offset by half a cell.
fn draw_dots(surface: &mut Surface, accent: Color) {
    let w = surface.width() as f32;
    let h = surface.height() as f32;

    let mut cy = DOT_OFFSET;
    while cy < h {
        let mut cx = DOT_OFFSET;
        while cx < w {
            fill_circle(surface, cx, cy, DOT_RADIUS, accent, PATTERN_ALPHA);
            cx += DOT_STEP;
        }
        cy += DOT_STEP;
    }
}

/// Evenly spaced vertical and horizontal lines, each stroked independently
/// (crossings blend twice, like separate strokes do).
fn draw_grid(surface: &mut Surface, accent: Color) {
    let w = surface.width();
    let h = surface.height();

    let mut line_x = 0.0f32;
    while line_x < w as f32 {
        stroke_vertical_line(surface, line_x, accent, PATTERN_ALPHA);
        line_x += GRID_STEP;
    }
    let mut line_y = 0.0f32;
    while line_y < h as f32 {
        stroke_horizontal_line(surface, line_y, accent, PATTERN_ALPHA);
        line_y += GRID_STEP;
    }
}

/// Stroke a connected polyline as one path: coverage is max-accumulated
/// across segments before blending, so joints never double-darken.
fn stroke_polyline(surface: &mut Surface, pts: &[(f32, f32)], color: Color, alpha: f32) {
    if pts.len() < 2 {
        return;
    }
    let pad = STROKE_WIDTH * 0.5 + 1.0;

    let mut min_x = f32::MAX;
    let mut min_y = f32::MAX;
    let mut max_x = f32::MIN;
    let mut max_y = f32::MIN;
    for &(x, y) in pts {
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }
    let x0 = ((min_x - pad).floor() as i32).max(0);
    let y0 = ((min_y - pad).floor() as i32).max(0);
    let x1 = ((max_x + pad).ceil() as i32).min(surface.width() as i32);
    let y1 = ((max_y + pad).ceil() as i32).min(surface.height() as i32);
    if x0 >= x1 || y0 >= y1 {
        return;
    }
    let mw = (x1 - x0) as usize;
    let mh = (y1 - y0) as usize;
    let mut mask = vec![0.0f32; mw * mh];

    for seg in pts.windows(2) {
        let (ax, ay) = seg[0];
        let (bx, by) = seg[1];
        let sx0 = ((ax.min(bx) - pad).floor() as i32).max(x0);
        let sy0 = ((ay.min(by) - pad).floor() as i32).max(y0);
        let sx1 = ((ax.max(bx) + pad).ceil() as i32).min(x1);
        let sy1 = ((ay.max(by) + pad).ceil() as i32).min(y1);
        for py in sy0..sy1 {
            let fy = py as f32 + 0.5;
            for px in sx0..sx1 {
                let fx = px as f32 + 0.5;
                let d = sdf_segment(fx, fy, ax, ay, bx, by);
                let cov = stroke_coverage(d, STROKE_WIDTH);
                if cov > 0.0 {
                    let idx = (py - y0) as usize * mw + (px - x0) as usize;
                    mask[idx] = mask[idx].max(cov);
                }
            }
        }
    }

    for iy in 0..mh {
        for ix in 0..mw {
            let cov = mask[iy * mw + ix];
            if cov > 0.0 {
                surface.blend_pixel(x0 + ix as i32, y0 + iy as i32, color, alpha * cov);
            }
        }
    }
}

fn fill_circle(surface: &mut Surface, cx: f32, cy: f32, r: f32, color: Color, alpha: f32) {
    let pad = r + 1.0;
    let x0 = ((cx - pad).floor() as i32).max(0);
    let y0 = ((cy - pad).floor() as i32).max(0);
    let x1 = ((cx + pad).ceil() as i32).min(surface.width() as i32);
    let y1 = ((cy + pad).ceil() as i32).min(surface.height() as i32);

    for py in y0..y1 {
        let fy = py as f32 + 0.5;
        for px in x0..x1 {
            let fx = px as f32 + 0.5;
            let cov = coverage(sdf_circle(fx, fy, cx, cy, r));
            if cov > 0.0 {
                surface.blend_pixel(px, py, color, alpha * cov);
            }
        }
    }
}

fn stroke_vertical_line(surface: &mut Surface, line_x: f32, color: Color, alpha: f32) {
    let pad = STROKE_WIDTH * 0.5 + 1.0;
    let x0 = ((line_x - pad).floor() as i32).max(0);
    let x1 = ((line_x + pad).ceil() as i32).min(surface.width() as i32);
    for py in 0..surface.height() as i32 {
        for px in x0..x1 {
            let cov = stroke_coverage(px as f32 + 0.5 - line_x, STROKE_WIDTH);
            if cov > 0.0 {
                surface.blend_pixel(px, py, color, alpha * cov);
            }
        }
    }
}

fn stroke_horizontal_line(surface: &mut Surface, line_y: f32, color: Color, alpha: f32) {
    let pad = STROKE_WIDTH * 0.5 + 1.0;
    let y0 = ((line_y - pad).floor() as i32).max(0);
    let y1 = ((line_y + pad).ceil() as i32).min(surface.height() as i32);
    for py in y0..y1 {
        let cov = stroke_coverage(py as f32 + 0.5 - line_y, STROKE_WIDTH);
        if cov > 0.0 {
            for px in 0..surface.width() as i32 {
                surface.blend_pixel(px, py, color, alpha * cov);
            }
        }
    }
}
