// ============================================================================
// MOCKUP — staged product-shot compositor
// ============================================================================
//
// Builds the photoreal frame around a pattern: studio backdrop, a tilted
// rounded-rectangle pad with the artwork clipped inside, a soft drop
// shadow, the optional comic/anime print treatment, and a diagonal shine.
//
// The pad is never rotated by transforming pixels forward; every pass maps
// device pixels into the pad's local space with the inverse rotation and
// evaluates coverage there.

use image::RgbaImage;
use rayon::prelude::*;

use crate::canvas::Surface;
use crate::catalog::{MockupItem, StyleKind};
use crate::color::Color;
use crate::ops::blur::gaussian_blur_mask;
use crate::ops::geometry::{coverage, sdf_box, sdf_rounded_box, stroke_coverage};
use crate::ops::pattern::{render_pattern, RenderParams};

/// Studio backdrop gradient, top → bottom.
pub const STUDIO_TOP: Color = Color::rgb(0x0b, 0x12, 0x20);
pub const STUDIO_BOTTOM: Color = Color::rgb(0x11, 0x18, 0x27);
/// Base fill of the pad where the artwork does not reach.
pub const PAD_BASE: Color = Color::rgb(0x0f, 0x17, 0x2a);

const PAD_CORNER_RADIUS: f32 = 22.0;
const TILT_SMALL: f32 = -0.12; // radians
const TILT_LARGE: f32 = 0.08;

const SHADOW_OFFSET_Y: i32 = 18;
const SHADOW_SIGMA: f32 = 12.0;
const SHADOW_ALPHA: f32 = 0.5;

const HALFTONE_STEP: f32 = 20.0;
const HALFTONE_RADIUS: f32 = 3.0;
const HALFTONE_ALPHA: f32 = 0.18;

const STREAK_COUNT: usize = 10;
const STREAK_TOP_STEP: f32 = 14.0;
const STREAK_BOTTOM_STEP: f32 = 6.0;
const STREAK_ALPHA: f32 = 0.25;
const STREAK_WIDTH: f32 = 1.0;

const SHINE_ALPHA: f32 = 0.06;
const SHINE_CORNER_RADIUS: f32 = 40.0;

/// Fully repaint `surface` as a staged product photo of `item`.
pub fn render_mockup(surface: &mut Surface, item: &MockupItem) {
    let w = surface.width();
    let h = surface.height();
    let fw = w as f32;
    let fh = h as f32;

    surface.clear();
    fill_vertical_gradient(surface, STUDIO_TOP, STUDIO_BOTTOM);

    let angle = match item.size {
        crate::canvas::SizeClass::Small => TILT_SMALL,
        crate::canvas::SizeClass::Large => TILT_LARGE,
    };
    let (pw, ph) = pad_extent(item, fw, fh);
    let cx = fw * 0.5;
    let cy = fh * 0.5;

    // The artwork lives on [0,w]×[0,h] of the pad's local space, so only
    // the part overlapping the pad silhouette is ever visible. Its caption
    // (style label) lies outside that overlap at every canonical size.
    let mut art = Surface::new(w, h);
    render_pattern(
        &mut art,
        &RenderParams {
            background: item.background,
            accent: item.accent,
            pattern: item.pattern,
            caption: item.style.caption().to_string(),
            size: item.size,
        },
    );

    let silhouette = pad_silhouette(w, h, cx, cy, angle, pw, ph);
    composite_shadow(surface, &silhouette);
    composite_pad(surface, &silhouette, art.pixels(), item, cx, cy, angle, pw, ph);
    draw_shine(surface);
}

/// Pad pixel extent for a given frame. Small pads are square, large pads
/// are wide with a 0.58 height ratio.
fn pad_extent(item: &MockupItem, fw: f32, fh: f32) -> (f32, f32) {
    match item.size {
        crate::canvas::SizeClass::Small => {
            let pw = (fw * 0.66).min(fh * 0.66);
            (pw, pw)
        }
        crate::canvas::SizeClass::Large => {
            let pw = (fw * 0.8).min(fh * 0.6);
            (pw, pw * 0.58)
        }
    }
}

/// Opaque vertical gradient across the whole surface.
fn fill_vertical_gradient(surface: &mut Surface, top: Color, bottom: Color) {
    let w = surface.width() as usize;
    let fh = surface.height() as f32;
    let stride = w * 4;

    surface
        .raw_mut()
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row)| {
            let t = ((y as f32 + 0.5) / fh).clamp(0.0, 1.0);
            let c = top.lerp(bottom, t);
            for x in 0..w {
                let pi = x * 4;
                row[pi] = c.r;
                row[pi + 1] = c.g;
                row[pi + 2] = c.b;
                row[pi + 3] = 255;
            }
        });
}

/// Device-space coverage of the rotated rounded-rect pad, one f32 per pixel.
fn pad_silhouette(
    w: u32,
    h: u32,
    cx: f32,
    cy: f32,
    angle: f32,
    pw: f32,
    ph: f32,
) -> Vec<f32> {
    let inv_cos = angle.cos();
    let inv_sin = -angle.sin();
    let hx = pw * 0.5;
    let hy = ph * 0.5;
    let w = w as usize;

    let mut mask = vec![0.0f32; w * h as usize];
    mask.par_chunks_mut(w).enumerate().for_each(|(y, row)| {
        let py = y as f32 + 0.5;
        for (x, out) in row.iter_mut().enumerate() {
            let px = x as f32 + 0.5;
            let dx = px - cx;
            let dy = py - cy;
            let lx = dx * inv_cos - dy * inv_sin;
            let ly = dx * inv_sin + dy * inv_cos;
            *out = coverage(sdf_rounded_box(lx, ly, hx, hy, PAD_CORNER_RADIUS));
        }
    });
    mask
}

/// Soft drop shadow: the silhouette shifted down, blurred, and blended in
/// black underneath where the pad will be drawn.
fn composite_shadow(surface: &mut Surface, silhouette: &[f32]) {
    let w = surface.width() as usize;
    let h = surface.height() as usize;

    let mut offset = vec![0.0f32; w * h];
    for y in 0..h {
        let sy = y as i32 - SHADOW_OFFSET_Y;
        if sy < 0 || sy as usize >= h {
            continue;
        }
        let src = &silhouette[sy as usize * w..(sy as usize + 1) * w];
        offset[y * w..(y + 1) * w].copy_from_slice(src);
    }
    let blurred = gaussian_blur_mask(&offset, w, h, SHADOW_SIGMA);

    let black = Color::rgb(0, 0, 0);
    let stride = w * 4;
    surface
        .raw_mut()
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row)| {
            for x in 0..w {
                let a = blurred[y * w + x] * SHADOW_ALPHA;
                if a > 0.001 {
                    blend_into_row(row, x, black, a);
                }
            }
        });
}

/// Draw the pad: base fill, the artwork sampled through the inverse
/// rotation, and the style overlay, all clipped by the silhouette coverage.
#[allow(clippy::too_many_arguments)]
fn composite_pad(
    surface: &mut Surface,
    silhouette: &[f32],
    art: &RgbaImage,
    item: &MockupItem,
    cx: f32,
    cy: f32,
    angle: f32,
    pw: f32,
    ph: f32,
) {
    let w = surface.width() as usize;
    let fw = surface.width() as f32;
    let fh = surface.height() as f32;
    let inv_cos = angle.cos();
    let inv_sin = -angle.sin();
    let hx = pw * 0.5;
    let hy = ph * 0.5;
    let style = item.style;
    let accent = item.accent;
    let black = Color::rgb(0, 0, 0);

    // Anime streaks lean right: top anchors advance faster than bottom ones.
    let streaks: Vec<(f32, f32, f32, f32)> = (0..STREAK_COUNT)
        .map(|i| {
            let i = i as f32;
            (
                -hx + i * STREAK_TOP_STEP,
                -hy,
                -hx + i * STREAK_BOTTOM_STEP,
                hy,
            )
        })
        .collect();

    let stride = w * 4;
    surface
        .raw_mut()
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row)| {
            let py = y as f32 + 0.5;
            for x in 0..w {
                let cov = silhouette[y * w + x];
                if cov <= 0.0 {
                    continue;
                }
                let px = x as f32 + 0.5;
                let dx = px - cx;
                let dy = py - cy;
                let lx = dx * inv_cos - dy * inv_sin;
                let ly = dx * inv_sin + dy * inv_cos;

                // Artwork where the local point falls on [0,w]×[0,h];
                // pad base color elsewhere.
                let art_cov = coverage(sdf_box(lx - fw * 0.5, ly - fh * 0.5, fw * 0.5, fh * 0.5));
                let mut color = if art_cov > 0.0 {
                    let sample = bilinear_sample(art, lx, ly);
                    PAD_BASE.lerp(sample, art_cov)
                } else {
                    PAD_BASE
                };

                match style {
                    StyleKind::Plain => {}
                    StyleKind::Comic => {
                        // Halftone lattice anchored at (-w, -h), 20px cells.
                        let u = (lx + fw).rem_euclid(HALFTONE_STEP);
                        let v = (ly + fh).rem_euclid(HALFTONE_STEP);
                        let du = u.min(HALFTONE_STEP - u);
                        let dv = v.min(HALFTONE_STEP - v);
                        let d = (du * du + dv * dv).sqrt() - HALFTONE_RADIUS;
                        let dot = coverage(d);
                        if dot > 0.0 {
                            color = color.lerp(black, HALFTONE_ALPHA * dot);
                        }
                    }
                    StyleKind::Anime => {
                        let mut dist = f32::MAX;
                        for &(ax, ay, bx, by) in &streaks {
                            let d = crate::ops::geometry::sdf_segment(lx, ly, ax, ay, bx, by);
                            dist = dist.min(d);
                        }
                        let streak = stroke_coverage(dist, STREAK_WIDTH);
                        if streak > 0.0 {
                            color = color.lerp(accent, STREAK_ALPHA * streak);
                        }
                    }
                }

                blend_into_row(row, x, color, cov);
            }
        });
}

/// Diagonal white shine over a large rounded rectangle, strongest at the
/// top-left and fading to nothing at the bottom-right.
fn draw_shine(surface: &mut Surface) {
    let w = surface.width() as usize;
    let fw = surface.width() as f32;
    let fh = surface.height() as f32;
    let hx = fw * 0.35;
    let hy = fh * 0.4;
    let cx = fw * 0.15 + hx;
    let cy = fh * 0.1 + hy;
    let inv_len_sq = 1.0 / (fw * fw + fh * fh);
    let white = Color::rgb(255, 255, 255);

    let stride = w * 4;
    surface
        .raw_mut()
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row)| {
            let py = y as f32 + 0.5;
            for x in 0..w {
                let px = x as f32 + 0.5;
                let cov = coverage(sdf_rounded_box(
                    px - cx,
                    py - cy,
                    hx,
                    hy,
                    SHINE_CORNER_RADIUS,
                ));
                if cov <= 0.0 {
                    continue;
                }
                let t = ((px * fw + py * fh) * inv_len_sq).clamp(0.0, 1.0);
                let a = SHINE_ALPHA * (1.0 - t) * cov;
                if a > 0.0005 {
                    blend_into_row(row, x, white, a);
                }
            }
        });
}

/// Source-over blend directly into a raw RGBA row (for the rayon passes).
#[inline]
fn blend_into_row(row: &mut [u8], x: usize, color: Color, alpha: f32) {
    let t = alpha.clamp(0.0, 1.0);
    let pi = x * 4;
    row[pi] = (row[pi] as f32 * (1.0 - t) + color.r as f32 * t).round() as u8;
    row[pi + 1] = (row[pi + 1] as f32 * (1.0 - t) + color.g as f32 * t).round() as u8;
    row[pi + 2] = (row[pi + 2] as f32 * (1.0 - t) + color.b as f32 * t).round() as u8;
    row[pi + 3] = (row[pi + 3] as f32 * (1.0 - t) + 255.0 * t).round() as u8;
}

/// Clamped bilinear sample of an opaque RGBA image at a fractional
/// position (pixel centers at +0.5).
fn bilinear_sample(img: &RgbaImage, x: f32, y: f32) -> Color {
    let w = img.width() as i32;
    let h = img.height() as i32;
    let gx = (x - 0.5).clamp(0.0, (w - 1) as f32);
    let gy = (y - 0.5).clamp(0.0, (h - 1) as f32);
    let x0 = gx.floor() as i32;
    let y0 = gy.floor() as i32;
    let x1 = (x0 + 1).min(w - 1);
    let y1 = (y0 + 1).min(h - 1);
    let tx = gx - x0 as f32;
    let ty = gy - y0 as f32;

    let p00 = img.get_pixel(x0 as u32, y0 as u32);
    let p10 = img.get_pixel(x1 as u32, y0 as u32);
    let p01 = img.get_pixel(x0 as u32, y1 as u32);
    let p11 = img.get_pixel(x1 as u32, y1 as u32);

    let mix = |c: usize| -> u8 {
        let top = p00[c] as f32 * (1.0 - tx) + p10[c] as f32 * tx;
        let bot = p01[c] as f32 * (1.0 - tx) + p11[c] as f32 * tx;
        (top * (1.0 - ty) + bot * ty).round().clamp(0.0, 255.0) as u8
    };
    Color::rgb(mix(0), mix(1), mix(2))
}
