// main.rs - Interactive Conway's Game of Life viewer
// Seeds cells with the mouse, steps or runs the simulation, pans and zooms.

use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use life_core::Recycling;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod app;       // Viewer state and actions
mod config;    // JSON config + errors
mod patterns;  // Seed patterns
mod ui;        // eframe::App implementation
mod view;      // Pan/zoom and coordinate mapping

use app::LifeViewer;
use config::{ViewerConfig, ViewerError};

#[derive(Parser, Debug)]
#[command(author, version, about = "Interactive Conway's Game of Life viewer")]
struct Args {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Cells per grid side
    #[arg(long)]
    width: Option<usize>,

    /// Generations per second while running
    #[arg(long)]
    speed: Option<f32>,

    /// Pattern to place at startup (e.g. "glider", "gosper glider gun")
    #[arg(long)]
    pattern: Option<String>,

    /// Drop work buffers after each generation instead of reusing them
    #[arg(long)]
    no_recycling: bool,
}

fn resolve_config(args: &Args) -> Result<ViewerConfig, ViewerError> {
    let mut config = match &args.config {
        Some(path) => ViewerConfig::load(path)?,
        None => ViewerConfig::default(),
    };
    if let Some(width) = args.width {
        config.grid.width = width;
    }
    if let Some(speed) = args.speed {
        config.set_speed(speed);
    }
    if args.no_recycling {
        config.grid.recycling = Recycling::Disabled;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<(), ViewerError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = resolve_config(&args)?;
    let mut viewer = LifeViewer::new(&config)?;

    if let Some(name) = &args.pattern {
        match patterns::find(name) {
            Some(index) => {
                viewer.selected_pattern = index;
                viewer.apply_selected_pattern();
            }
            None => warn!("Unknown pattern {name:?}, starting with an empty grid"),
        }
    }

    info!(
        "Starting viewer: {}x{} grid, {:?} recycling",
        config.grid.width, config.grid.width, config.grid.recycling
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(|_cc| Box::new(viewer)),
    )
    .map_err(|err| ViewerError::Window(format!("{err:?}")))
}
