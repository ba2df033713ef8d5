//! Main application entry point.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use touchtracker_app::{describe_stroke, load_config, load_script, App, AppConfig, AppResult};
use touchtracker_core::SurfaceConfig;

/// Replay recorded touch input on a TouchTracker surface and print the strokes.
#[derive(Debug, Parser)]
#[command(name = "touchtracker", version)]
struct Args {
    /// JSON file with the events to replay.
    script: PathBuf,

    /// JSON file with the surface configuration.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn run(args: &Args) -> AppResult<()> {
    let surface = match &args.config {
        Some(path) => load_config(path)?,
        None => SurfaceConfig::default(),
    };
    let events = load_script(&args.script)?;

    let mut app = App::new(AppConfig { surface });
    for command in app.replay(&events)? {
        println!("{}", describe_stroke(command));
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting TouchTracker");

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
