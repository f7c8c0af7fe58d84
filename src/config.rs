//! Command line configuration.
//!
//! `Cli` is the raw clap surface; [`Settings`] is the validated result the
//! rest of the program works with.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{ensure, Result};
use clap::{ArgAction, Parser, Subcommand};

use crate::core::GameSettings;
use crate::types::{BoardConfig, BOARD_HEIGHT, BOARD_WIDTH, WAIT_TIME_MS};

/// Largest accepted board side, in cells
pub const MAX_BOARD_SIDE: u16 = 64;

#[derive(Parser, Debug)]
#[command(name = "blockfall", version, about = "Falling-block puzzle game for the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Board width in cells
    #[arg(long, global = true, default_value_t = BOARD_WIDTH)]
    pub width: u16,

    /// Board height in cells
    #[arg(long, global = true, default_value_t = BOARD_HEIGHT)]
    pub height: u16,

    /// RNG seed for the piece sequence (defaults to the current time)
    #[arg(long, global = true)]
    pub seed: Option<u32>,

    /// Gravity interval in milliseconds
    #[arg(long = "wait-ms", global = true, default_value_t = WAIT_TIME_MS)]
    pub wait_ms: u32,

    /// Append logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal (default)
    Play,
    /// Let the built-in player run a game and print a JSON report
    Headless {
        /// Stop after this many locked pieces
        #[arg(long, default_value_t = 500)]
        max_pieces: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Play,
    Headless { max_pieces: u32 },
}

/// Validated program settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub mode: Mode,
    pub game: GameSettings,
    pub log_file: Option<PathBuf>,
    pub verbosity: u8,
}

impl Settings {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        ensure!(
            (1..=MAX_BOARD_SIDE).contains(&cli.width),
            "--width must be between 1 and {MAX_BOARD_SIDE}, got {}",
            cli.width
        );
        ensure!(
            (1..=MAX_BOARD_SIDE).contains(&cli.height),
            "--height must be between 1 and {MAX_BOARD_SIDE}, got {}",
            cli.height
        );
        ensure!(cli.wait_ms > 0, "--wait-ms must be greater than zero");

        let mode = match cli.command {
            None | Some(Command::Play) => Mode::Play,
            Some(Command::Headless { max_pieces }) => Mode::Headless { max_pieces },
        };

        Ok(Self {
            mode,
            game: GameSettings {
                board: BoardConfig::new(cli.width, cli.height),
                seed: cli.seed.unwrap_or_else(time_seed),
                wait_time_ms: cli.wait_ms,
            },
            log_file: cli.log_file,
            verbosity: cli.verbose,
        })
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32 ^ d.subsec_nanos())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Settings> {
        let cli = Cli::try_parse_from(std::iter::once("blockfall").chain(args.iter().copied()))?;
        Settings::from_cli(cli)
    }

    #[test]
    fn defaults_play_on_ten_by_twenty() {
        let settings = parse(&["--seed", "4"]).unwrap();
        assert_eq!(settings.mode, Mode::Play);
        assert_eq!(settings.game.board, BoardConfig::default());
        assert_eq!(settings.game.seed, 4);
        assert_eq!(settings.game.wait_time_ms, WAIT_TIME_MS);
        assert_eq!(settings.verbosity, 0);
    }

    #[test]
    fn headless_with_global_options_after_subcommand() {
        let settings = parse(&["headless", "--max-pieces", "30", "--width", "6", "-vv"]).unwrap();
        assert_eq!(settings.mode, Mode::Headless { max_pieces: 30 });
        assert_eq!(settings.game.board.width, 6);
        assert_eq!(settings.verbosity, 2);
    }

    #[test]
    fn rejects_degenerate_boards() {
        assert!(parse(&["--width", "0"]).is_err());
        assert!(parse(&["--height", "65"]).is_err());
        assert!(parse(&["--wait-ms", "0"]).is_err());
    }
}
