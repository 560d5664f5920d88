// ============================================================================
// OPS MODULE — CPU rasterization pipeline for PadForge
// ============================================================================
//
// Architecture:
//   geometry.rs — signed-distance primitives and coverage mapping
//   blur.rs     — separable Gaussian blur over f32 coverage masks
//   text.rs     — caption layout and glow rendering (ab_glyph outlines)
//   pattern.rs  — flat artwork: gradient fill + waves / dots / grid motifs
//   mockup.rs   — staged product shot: backdrop, tilted pad, shadow, shine
// ============================================================================

pub mod blur;
pub mod geometry;
pub mod mockup;
pub mod pattern;
pub mod text;

pub use mockup::render_mockup;
pub use pattern::{render_pattern, RenderParams};
