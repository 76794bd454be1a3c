//! Command-line configuration for a game session.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::Verbosity;

/// Music played in the background unless sound is disabled.
pub const DEFAULT_MUSIC_PATH: &str = "assets/background_music.mp3";

/// Maze size presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Difficulty {
    /// 10 rows by 20 columns.
    #[default]
    Easy,
    /// 12 rows by 25 columns.
    Medium,
    /// 15 rows by 30 columns.
    Hard,
}

impl Difficulty {
    /// Returns the `(rows, cols)` of mazes generated at this difficulty.
    pub const fn dimensions(self) -> (usize, usize) {
        match self {
            Self::Easy => (10, 20),
            Self::Medium => (12, 25),
            Self::Hard => (15, 30),
        }
    }
}

/// Command-line arguments of the game.
#[derive(Debug, Parser)]
#[command(version, about = "Collect every star hidden in a random maze.")]
pub struct Cli {
    /// Name shown in the HUD and on the final summary.
    #[arg(long)]
    pub name: String,
    /// Size of the generated maze.
    #[arg(long, value_enum, default_value_t = Difficulty::Easy)]
    pub difficulty: Difficulty,
    /// Do not play background music.
    #[arg(long)]
    pub disable_sound: bool,
    /// Music file looped in the background.
    #[arg(long, default_value = DEFAULT_MUSIC_PATH)]
    pub music: PathBuf,
    /// Seed for the maze generator, for reproducible mazes.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Write the log to this file. Nothing is logged without it.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
    /// Logging verbosity.
    #[command(flatten)]
    pub verbosity: Verbosity,
}

/// Plain settings consumed by the [`App`](crate::App).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Opaque player label.
    pub player_name: String,
    /// Maze size preset.
    pub difficulty: Difficulty,
    /// Background music to play, or [`None`] when sound is disabled.
    pub music: Option<PathBuf>,
    /// Generator seed, drawn from the operating system when absent.
    pub seed: Option<u64>,
}

impl Settings {
    /// Builds default settings for `player_name`.
    pub fn new<S: Into<String>>(player_name: S) -> Self {
        Self {
            player_name: player_name.into(),
            difficulty: Difficulty::default(),
            music: None,
            seed: None,
        }
    }
}

impl From<&Cli> for Settings {
    fn from(cli: &Cli) -> Self {
        Self {
            player_name: cli.name.clone(),
            difficulty: cli.difficulty,
            music: (!cli.disable_sound).then(|| cli.music.clone()),
            seed: cli.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_difficulty_presets() {
        assert_eq!(Difficulty::Easy.dimensions(), (10, 20));
        assert_eq!(Difficulty::Medium.dimensions(), (12, 25));
        assert_eq!(Difficulty::Hard.dimensions(), (15, 30));
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["starmaze", "--name", "Ana"]).expect("valid arguments");
        let settings = Settings::from(&cli);

        assert_eq!(settings.player_name, "Ana");
        assert_eq!(settings.difficulty, Difficulty::Easy);
        assert_eq!(settings.music, Some(PathBuf::from(DEFAULT_MUSIC_PATH)));
        assert_eq!(settings.seed, None);
        assert_eq!(cli.log_file, None);
    }

    #[test]
    fn test_cli_all_flags() {
        let cli = Cli::try_parse_from([
            "starmaze",
            "--name",
            "Bruno",
            "--difficulty",
            "hard",
            "--disable-sound",
            "--seed",
            "99",
            "--log-file",
            "game.log",
        ])
        .expect("valid arguments");
        let settings = Settings::from(&cli);

        assert_eq!(settings.difficulty, Difficulty::Hard);
        assert_eq!(settings.music, None);
        assert_eq!(settings.seed, Some(99));
        assert_eq!(cli.log_file, Some(PathBuf::from("game.log")));
    }

    #[test]
    fn test_cli_requires_name() {
        assert!(Cli::try_parse_from(["starmaze"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_difficulty() {
        assert!(
            Cli::try_parse_from(["starmaze", "--name", "Ana", "--difficulty", "extreme"]).is_err()
        );
    }
}
