use image::RgbaImage;

use crate::color::Color;

// ============================================================================
// SIZE CLASSES — every render target's dimensions derive from these
// ============================================================================

/// Physical product size class. Small is the compact square mousepad,
/// Large is the wide deskpad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeClass {
    Small,
    Large,
}

impl SizeClass {
    /// Stable lowercase key, used in export file names and CLI flags.
    pub fn key(&self) -> &'static str {
        match self {
            SizeClass::Small => "small",
            SizeClass::Large => "large",
        }
    }

    /// Short UI label for the size selector.
    pub fn label(&self) -> &'static str {
        match self {
            SizeClass::Small => "Klein",
            SizeClass::Large => "Groot",
        }
    }

    /// Physical dimensions shown next to previews.
    pub fn physical(&self) -> &'static str {
        match self {
            SizeClass::Small => "26 × 26 cm",
            SizeClass::Large => "60 × 35 cm",
        }
    }

    pub fn all() -> &'static [SizeClass] {
        &[SizeClass::Small, SizeClass::Large]
    }

    /// Designer live-preview resolution (also the download resolution).
    pub fn preview_dims(&self) -> (u32, u32) {
        match self {
            SizeClass::Small => (600, 600),
            SizeClass::Large => (900, 525),
        }
    }

    /// Gallery thumbnail resolution.
    pub fn thumb_dims(&self) -> (u32, u32) {
        match self {
            SizeClass::Small => (320, 320),
            SizeClass::Large => (480, 280),
        }
    }

    /// Photo-card (staged mockup) resolution.
    pub fn card_dims(&self) -> (u32, u32) {
        match self {
            SizeClass::Small => (560, 360),
            SizeClass::Large => (720, 420),
        }
    }
}

/// Slideshow frames render at one fixed 16:9 resolution regardless of
/// the item's size class.
pub const FRAME_DIMS: (u32, u32) = (1200, 675);

// ============================================================================
// SURFACE — an owned RGBA raster target
// ============================================================================

/// An owned drawable raster target. A surface is exclusively owned by the
/// caller of a render for the duration of that render; renders fully
/// overwrite prior content.
pub struct Surface {
    pixels: RgbaImage,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width.max(1), height.max(1)),
        }
    }

    /// Surface at the designer preview resolution for `size`.
    pub fn preview(size: SizeClass) -> Self {
        let (w, h) = size.preview_dims();
        Self::new(w, h)
    }

    /// Surface at the photo-card resolution for `size`.
    pub fn card(size: SizeClass) -> Self {
        let (w, h) = size.card_dims();
        Self::new(w, h)
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut RgbaImage {
        &mut self.pixels
    }

    /// Consume the surface, keeping the rendered image.
    pub fn into_pixels(self) -> RgbaImage {
        self.pixels
    }

    /// Raw RGBA bytes, row-major.
    pub fn raw(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    pub fn raw_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Reset every pixel to transparent black.
    pub fn clear(&mut self) {
        for p in self.pixels.pixels_mut() {
            *p = image::Rgba([0, 0, 0, 0]);
        }
    }

    /// Source-over blend of `color` at `alpha` onto the pixel at (x, y).
    /// Out-of-bounds coordinates are ignored.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Color, alpha: f32) {
        if x < 0 || y < 0 || x as u32 >= self.width() || y as u32 >= self.height() {
            return;
        }
        let t = alpha.clamp(0.0, 1.0);
        if t <= 0.0 {
            return;
        }
        let p = self.pixels.get_pixel_mut(x as u32, y as u32);
        p[0] = (p[0] as f32 * (1.0 - t) + color.r as f32 * t).round() as u8;
        p[1] = (p[1] as f32 * (1.0 - t) + color.g as f32 * t).round() as u8;
        p[2] = (p[2] as f32 * (1.0 - t) + color.b as f32 * t).round() as u8;
        p[3] = (p[3] as f32 * (1.0 - t) + 255.0 * t).round() as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dims_are_pure_functions_of_size() {
        assert_eq!(SizeClass::Small.preview_dims(), (600, 600));
        assert_eq!(SizeClass::Large.preview_dims(), (900, 525));
        assert_eq!(SizeClass::Small.thumb_dims(), (320, 320));
        assert_eq!(SizeClass::Large.thumb_dims(), (480, 280));
        assert_eq!(SizeClass::Small.card_dims(), (560, 360));
        assert_eq!(SizeClass::Large.card_dims(), (720, 420));
    }

    #[test]
    fn test_preview_surface_matches_size_class() {
        let s = Surface::preview(SizeClass::Large);
        assert_eq!((s.width(), s.height()), (900, 525));
    }

    #[test]
    fn test_blend_full_alpha_replaces() {
        let mut s = Surface::new(4, 4);
        s.blend_pixel(1, 1, Color::rgb(10, 20, 30), 1.0);
        let p = s.pixels().get_pixel(1, 1);
        assert_eq!(p.0, [10, 20, 30, 255]);
    }

    #[test]
    fn test_blend_out_of_bounds_is_ignored() {
        let mut s = Surface::new(4, 4);
        s.blend_pixel(-1, 0, Color::rgb(255, 0, 0), 1.0);
        s.blend_pixel(4, 4, Color::rgb(255, 0, 0), 1.0);
        assert!(s.pixels().pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }
}
