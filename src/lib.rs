//! PadForge — print-preview rendering for custom mousepads.
//!
//! The render core is two routines over owned RGBA surfaces:
//! [`ops::pattern::render_pattern`] for flat artwork and
//! [`ops::mockup::render_mockup`] for staged product shots. Everything else
//! (catalog, slideshow rotation, PNG export, CLI, GUI shell) feeds or hosts
//! those two.

pub mod app;
pub mod canvas;
pub mod catalog;
pub mod cli;
pub mod color;
pub mod io;
pub mod logger;
pub mod ops;
pub mod slideshow;
