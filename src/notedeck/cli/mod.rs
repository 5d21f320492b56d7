//! # CLI Layer
//!
//! This module is **one possible UI client** for notedeck. It is the only
//! place that parses arguments, touches the terminal, or sets up logging.
//!
//! - `setup`: clap definitions and version string
//! - `commands`: dispatch and one-shot handlers
//! - `browse`: the interactive viewer loop
//! - `render`: note, list, config and screen rendering (returns strings)
//! - `styles`: the color theme

mod browse;
pub mod commands;
mod render;
mod setup;
mod styles;

use tracing_subscriber::EnvFilter;

/// Log filter override, e.g. `NOTEDECK_LOG=notedeck=trace`.
const LOG_ENV: &str = "NOTEDECK_LOG";

pub(crate) fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
