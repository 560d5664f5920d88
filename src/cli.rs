// ============================================================================
// PadForge CLI — headless mockup export via command-line arguments
// ============================================================================
//
// Usage examples:
//   padforge --export small                                  (flat pattern, defaults)
//   padforge -e all --bg "#f59e0b" --accent "#fde68a" --pattern dots
//   padforge -e large --caption "Emerald Tide" --output-dir shots/
//   padforge -e small --staged --style comic --bg "#ef4444"
//
// No GUI is opened in CLI mode. Rendering runs synchronously on the calling
// thread (rayon parallelism inside a render call only).

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use crate::canvas::{SizeClass, Surface};
use crate::catalog::{MockupItem, PatternKind, StyleKind};
use crate::color::Color;
use crate::io::export_into;
use crate::ops::mockup::render_mockup;
use crate::ops::pattern::{render_pattern, RenderParams};

// ============================================================================
// CLI argument definition (clap Derive)
// ============================================================================

/// PadForge headless mockup exporter.
///
/// Render pattern previews and staged product shots to PNG — no GUI required.
#[derive(Parser, Debug)]
#[command(
    name = "padforge",
    about = "PadForge headless mockup exporter",
    long_about = "Render mousepad pattern previews and staged product shots to PNG\n\
                  without opening the GUI.\n\n\
                  Example:\n  \
                  padforge --export small --pattern waves --caption \"MouseCraft\"\n  \
                  padforge -e all --staged --style anime --output-dir shots/"
)]
pub struct CliArgs {
    /// Size class(es) to export: small, large, or all.
    #[arg(short, long, value_name = "small|large|all")]
    pub export: String,

    /// Background color as a #rrggbb hex string.
    #[arg(long, default_value = "#06b6d4", value_name = "HEX")]
    pub bg: String,

    /// Accent color as a #rrggbb hex string.
    #[arg(long, default_value = "#a5f3fc", value_name = "HEX")]
    pub accent: String,

    /// Background texture: waves, dots, or grid.
    #[arg(short, long, default_value = "waves", value_name = "KIND")]
    pub pattern: String,

    /// Caption text for the flat pattern export. An empty string falls back
    /// to the built-in placeholder.
    #[arg(short, long, default_value = "MouseCraft Studio", value_name = "TEXT")]
    pub caption: String,

    /// Export the staged product shot instead of the flat pattern.
    #[arg(long)]
    pub staged: bool,

    /// Overlay treatment for --staged: plain, comic, or anime.
    /// The staged caption comes from the style, not from --caption.
    #[arg(long, default_value = "plain", value_name = "STYLE")]
    pub style: String,

    /// Destination directory. Files are named mockup-<size>.png.
    #[arg(long, default_value = ".", value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Print per-file timing information.
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Returns `true` when the export flag is present in the real process
    /// arguments. Used by `main()` to route before creating an eframe window.
    pub fn is_cli_mode() -> bool {
        std::env::args().any(|a| a == "--export" || a == "-e")
    }
}

// ============================================================================
// Public entry point
// ============================================================================

/// Run all CLI exports and return an OS exit code.
/// `0` = all files succeeded, `1` = one or more failed.
pub fn run(args: CliArgs) -> ExitCode {
    let sizes = match parse_sizes(&args.export) {
        Some(s) => s,
        None => {
            eprintln!(
                "error: unknown size class '{}' (expected small, large, or all).",
                args.export
            );
            return ExitCode::FAILURE;
        }
    };

    let background = match Color::from_hex(&args.bg) {
        Some(c) => c,
        None => {
            eprintln!("error: invalid --bg color '{}' (expected #rrggbb).", args.bg);
            return ExitCode::FAILURE;
        }
    };
    let accent = match Color::from_hex(&args.accent) {
        Some(c) => c,
        None => {
            eprintln!(
                "error: invalid --accent color '{}' (expected #rrggbb).",
                args.accent
            );
            return ExitCode::FAILURE;
        }
    };
    let pattern = match parse_pattern(&args.pattern) {
        Some(p) => p,
        None => {
            eprintln!(
                "error: unknown pattern '{}' (expected waves, dots, or grid).",
                args.pattern
            );
            return ExitCode::FAILURE;
        }
    };
    let style = match parse_style(&args.style) {
        Some(s) => s,
        None => {
            eprintln!(
                "error: unknown style '{}' (expected plain, comic, or anime).",
                args.style
            );
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = std::fs::create_dir_all(&args.output_dir) {
        eprintln!(
            "error: could not create output directory '{}': {}",
            args.output_dir.display(),
            e
        );
        return ExitCode::FAILURE;
    }

    let total = sizes.len();
    let multi = total > 1;
    let mut any_failure = false;

    for (idx, &size) in sizes.iter().enumerate() {
        if multi || args.verbose {
            println!("[{}/{}] {}", idx + 1, total, size.key());
        }

        let file_start = Instant::now();
        match run_one(
            size,
            background,
            accent,
            pattern,
            &args.caption,
            args.staged,
            style,
            &args.output_dir,
        ) {
            Ok(path) => {
                if args.verbose || multi {
                    println!(
                        "  → {} ({:.0}ms)",
                        path.display(),
                        file_start.elapsed().as_secs_f64() * 1000.0
                    );
                }
            }
            Err(e) => {
                eprintln!("  error: {}", e);
                any_failure = true;
            }
        }
    }

    if any_failure { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

// ============================================================================
// Per-size export pipeline
// ============================================================================

#[allow(clippy::too_many_arguments)]
fn run_one(
    size: SizeClass,
    background: Color,
    accent: Color,
    pattern: PatternKind,
    caption: &str,
    staged: bool,
    style: StyleKind,
    output_dir: &Path,
) -> Result<PathBuf, String> {
    let surface = if staged {
        let mut surface = Surface::card(size);
        let item = MockupItem {
            size,
            title: "custom",
            style,
            background,
            accent,
            pattern,
        };
        render_mockup(&mut surface, &item);
        surface
    } else {
        let mut surface = Surface::preview(size);
        let params = RenderParams {
            background,
            accent,
            pattern,
            caption: caption.to_string(),
            size,
        };
        render_pattern(&mut surface, &params);
        surface
    };

    let path = export_into(surface.pixels(), output_dir, size)
        .map_err(|e| format!("save failed: {}", e))?;
    crate::log_info!("cli: exported {}", path.display());
    Ok(path)
}

// ============================================================================
// Helpers
// ============================================================================

fn parse_sizes(arg: &str) -> Option<Vec<SizeClass>> {
    match arg.to_lowercase().as_str() {
        "small" => Some(vec![SizeClass::Small]),
        "large" => Some(vec![SizeClass::Large]),
        "all" => Some(vec![SizeClass::Small, SizeClass::Large]),
        _ => None,
    }
}

fn parse_pattern(arg: &str) -> Option<PatternKind> {
    match arg.to_lowercase().as_str() {
        "waves" => Some(PatternKind::Waves),
        "dots" => Some(PatternKind::Dots),
        "grid" => Some(PatternKind::Grid),
        _ => None,
    }
}

fn parse_style(arg: &str) -> Option<StyleKind> {
    match arg.to_lowercase().as_str() {
        "plain" => Some(StyleKind::Plain),
        "comic" => Some(StyleKind::Comic),
        "anime" => Some(StyleKind::Anime),
        _ => None,
    }
}
