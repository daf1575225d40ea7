//! Gomoku GUI
//!
//! Hotseat Gomoku for two players on one screen.

use clap::Parser;
use gomoku::ui::GomokuApp;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command-line options
#[derive(Parser, Debug)]
#[command(name = "gomoku")]
#[command(about = "Five-in-a-row on a 15x15 board", long_about = None)]
#[command(version)]
struct Cli {
    /// Log filter used when RUST_LOG is not set (e.g. "debug", "gomoku=trace")
    #[arg(long, default_value = "info")]
    log: String,

    /// Initial window width
    #[arg(long, default_value_t = 1000.0)]
    width: f32,

    /// Initial window height
    #[arg(long, default_value_t = 750.0)]
    height: f32,
}

fn main() -> Result<(), eframe::Error> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!(width = cli.width, height = cli.height, "starting Gomoku");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([cli.width, cli.height])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(|cc| Ok(Box::new(GomokuApp::new(cc)))),
    )
}
