use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use tickit::core::config::DisplayConfig;
use tickit::tui;

/// No flags beyond plain invocation; all layout knobs live in
/// `DisplayConfig`.
#[derive(Parser)]
#[command(name = "tickit", about = "Interactive terminal to-do list", version)]
struct Args {}

fn main() -> std::io::Result<()> {
    let _args = Args::parse();

    // Initialize file logger - writes to tickit.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("tickit.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("tickit starting up");

    if let Err(e) = tui::run(DisplayConfig::default()) {
        log::error!("Terminal event loop failed: {e}");
        return Err(e);
    }
    Ok(())
}
