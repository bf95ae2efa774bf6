// src/bin/cli.rs
use color_eyre::eyre::{eyre, Result};
use timetable_grid::{cli, config::consts::LOG_FILE, log};

fn main() -> Result<()> {
    color_eyre::install()?;
    log::init(LOG_FILE);
    cli::run_from_env().map_err(|e| eyre!("{e}"))
}
