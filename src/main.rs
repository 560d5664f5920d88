use std::process::ExitCode;

use eframe::egui;
use padforge::{app::PadForgeApp, cli, logger};

fn main() -> ExitCode {
    // Session log is shared by both modes (overwrites the previous session).
    logger::init();

    // -- CLI / headless mode ---------------------------------------------
    if cli::CliArgs::is_cli_mode() {
        use clap::Parser;
        let args = cli::CliArgs::parse();
        return cli::run(args);
    }

    // -- GUI mode ----------------------------------------------------------
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title("PadForge"),
        ..Default::default()
    };

    match eframe::run_native(
        "PadForge",
        options,
        Box::new(|cc| Box::new(PadForgeApp::new(cc))),
    ) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: failed to start window: {}", e);
            ExitCode::FAILURE
        }
    }
}
