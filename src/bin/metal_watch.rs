// src/bin/metal_watch.rs
use metal_watch::{cli, config::options::AppOptions, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init()?;

    // Degraded runs still exit 0; the scheduler only sees crashes.
    cli::run(&AppOptions::from_env());
    Ok(())
}
