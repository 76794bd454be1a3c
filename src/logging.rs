//! Logger setup.
//!
//! The terminal belongs to the user interface while the game runs, so log records never go to
//! stdout or stderr. They are written to the file given on the command line, and dropped when no
//! file is given.

use std::{fs::File, path::Path};

use color_eyre::eyre::Result;
use env_logger::{Builder, Target, WriteStyle};
use log::LevelFilter;

/// Installs the global logger writing to `log_file` at `level`.
///
/// # Errors
///
/// This function may return errors if:
/// - The log file cannot be created
/// - A global logger was already installed
pub fn init(log_file: Option<&Path>, level: LevelFilter) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path)?;
    Builder::new()
        .filter_level(level)
        .write_style(WriteStyle::Never)
        .target(Target::Pipe(Box::new(file)))
        .try_init()?;

    Ok(())
}
