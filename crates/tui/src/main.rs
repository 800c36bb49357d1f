mod app;
mod config;
mod error;
mod ui;
mod view;

use std::{fs, path::PathBuf, sync::Mutex};

use crate::{config::AppConfig, error::Result};

fn main() -> Result<()> {
    let config = config::load()?;
    init_tracing(&config)?;

    let mut app = app::App::new(config)?;
    app.run()?;
    Ok(())
}

// The terminal owns stdout, so the log goes to a file next to the store.
fn init_tracing(config: &AppConfig) -> Result<()> {
    let log_path = PathBuf::from(&config.data_file).with_extension("log");
    let log_file = fs::File::create(log_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "tally_tui={level},engine={level}",
            level = config.log_level
        ))
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}
