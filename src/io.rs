//! PNG export for rendered surfaces.
//!
//! The only file format this application produces is the compressed mockup
//! download; naming is deterministic per size class so repeated exports
//! overwrite rather than accumulate.

use image::codecs::png::PngEncoder;
use image::RgbaImage;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::canvas::SizeClass;

/// Error type for mockup export operations
#[derive(Debug)]
pub enum ExportError {
    Io(std::io::Error),
    Encode(image::ImageError),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Io(e) => write!(f, "I/O error: {}", e),
            ExportError::Encode(e) => write!(f, "PNG encoding error: {}", e),
        }
    }
}

impl From<std::io::Error> for ExportError {
    fn from(e: std::io::Error) -> Self {
        ExportError::Io(e)
    }
}

impl From<image::ImageError> for ExportError {
    fn from(e: image::ImageError) -> Self {
        ExportError::Encode(e)
    }
}

/// Deterministic download name for a size class.
pub fn export_file_name(size: SizeClass) -> String {
    format!("mockup-{}.png", size.key())
}

/// Write rendered pixels to `path` as PNG.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    let encoder = PngEncoder::new(&mut writer);
    #[allow(deprecated)]
    encoder.encode(
        image.as_raw(),
        image.width(),
        image.height(),
        image::ColorType::Rgba8,
    )?;
    Ok(())
}

/// Export under the deterministic name inside `dir`; returns the full path.
pub fn export_into(image: &RgbaImage, dir: &Path, size: SizeClass) -> Result<PathBuf, ExportError> {
    let path = dir.join(export_file_name(size));
    save_png(image, &path)?;
    Ok(path)
}
