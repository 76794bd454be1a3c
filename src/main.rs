//! This crate contains the source code for the binary for the game starmaze.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use starmaze::{
    config::{Cli, Settings},
    logging, App,
};

fn main() -> Result<()> {
    install()?;

    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref(), cli.verbosity.log_level_filter())?;

    let mut terminal = ratatui::init();
    let result = App::new(Settings::from(&cli)).run(&mut terminal);
    ratatui::restore();

    result
}
