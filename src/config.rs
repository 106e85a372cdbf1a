//! Settings, read from an optional TOML file and the command line.

use crate::{
    board::AnimFrames,
    error::{Error, Result},
};
use clap::{crate_description, crate_name, crate_version, value_parser, Arg, ArgMatches, Command};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

/// Everything that shapes a run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Board width in cells
    pub width: usize,
    /// Board height in cells
    pub height: usize,
    /// Probability that a cell starts alive
    pub density: f64,
    /// Ticks a newborn cell keeps the birth colour
    pub born_frames: u8,
    /// Ticks a dead cell keeps the dying colour
    pub dying_frames: u8,
    /// Terminal columns per cell
    pub cell_width: u16,
    /// Pause between ticks, in milliseconds
    pub interval_ms: u64,
    /// Seed for the initial board; random when absent
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: 40,
            height: 40,
            density: 0.12,
            born_frames: 2,
            dying_frames: 2,
            cell_width: 2,
            interval_ms: 200,
            seed: None,
        }
    }
}

impl Config {
    /// Parses a TOML document. Missing keys keep their defaults.
    pub fn from_toml(text: &str) -> Result<Config> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a TOML file.
    pub fn load(path: &Path) -> Result<Config> {
        let text = fs::read_to_string(path).map_err(|source| Error::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Config::from_toml(&text)
    }

    /// Checks that every setting is usable.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "board size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(Error::InvalidConfig(format!(
                "density must be between 0 and 1, got {}",
                self.density
            )));
        }
        if self.born_frames == 0 || self.dying_frames == 0 {
            return Err(Error::InvalidConfig(String::from(
                "animation frames must be at least 1",
            )));
        }
        if self.cell_width == 0 {
            return Err(Error::InvalidConfig(String::from(
                "cell width must be at least 1",
            )));
        }
        Ok(())
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn frames(&self) -> AnimFrames {
        AnimFrames {
            born: self.born_frames,
            dying: self.dying_frames,
        }
    }
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub config: Config,
    /// Where to write logs; logging is off without it
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Builds the command-line interface.
    pub fn command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .about(crate_description!())
            .after_help("Press Esc or q to quit.")
            .arg(
                Arg::new("config")
                    .help("TOML file with default settings")
                    .long("config")
                    .short('c')
                    .value_name("PATH")
                    .value_parser(value_parser!(PathBuf)),
            )
            .arg(
                Arg::new("width")
                    .help("Board width in cells")
                    .long("width")
                    .value_name("CELLS")
                    .value_parser(value_parser!(usize)),
            )
            .arg(
                Arg::new("height")
                    .help("Board height in cells")
                    .long("height")
                    .value_name("CELLS")
                    .value_parser(value_parser!(usize)),
            )
            .arg(
                Arg::new("density")
                    .help("Probability that a cell starts alive")
                    .long("density")
                    .short('d')
                    .value_parser(value_parser!(f64)),
            )
            .arg(
                Arg::new("born-frames")
                    .help("Ticks a newborn cell is shown in red")
                    .long("born-frames")
                    .value_name("TICKS")
                    .value_parser(value_parser!(u8)),
            )
            .arg(
                Arg::new("dying-frames")
                    .help("Ticks a dead cell is shown in yellow")
                    .long("dying-frames")
                    .value_name("TICKS")
                    .value_parser(value_parser!(u8)),
            )
            .arg(
                Arg::new("cell-width")
                    .help("Terminal columns per cell")
                    .long("cell-width")
                    .value_name("COLUMNS")
                    .value_parser(value_parser!(u16)),
            )
            .arg(
                Arg::new("interval")
                    .help("Milliseconds between generations")
                    .long("interval")
                    .short('i')
                    .value_name("MS")
                    .value_parser(value_parser!(u64)),
            )
            .arg(
                Arg::new("seed")
                    .help("Seed for the initial board")
                    .long("seed")
                    .short('s')
                    .value_parser(value_parser!(u64)),
            )
            .arg(
                Arg::new("log-file")
                    .help("Write logs to this file (level from RUST_LOG)")
                    .long("log-file")
                    .value_name("PATH")
                    .value_parser(value_parser!(PathBuf)),
            )
    }

    /// Parses the process arguments, exiting with usage on bad input.
    pub fn parse() -> Result<Args> {
        Args::from_matches(&Args::command().get_matches())
    }

    /// Resolves the settings: defaults, then the config file, then flags.
    pub fn from_matches(matches: &ArgMatches) -> Result<Args> {
        let mut config = match matches.get_one::<PathBuf>("config") {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(&width) = matches.get_one::<usize>("width") {
            config.width = width;
        }
        if let Some(&height) = matches.get_one::<usize>("height") {
            config.height = height;
        }
        if let Some(&density) = matches.get_one::<f64>("density") {
            config.density = density;
        }
        if let Some(&frames) = matches.get_one::<u8>("born-frames") {
            config.born_frames = frames;
        }
        if let Some(&frames) = matches.get_one::<u8>("dying-frames") {
            config.dying_frames = frames;
        }
        if let Some(&cell_width) = matches.get_one::<u16>("cell-width") {
            config.cell_width = cell_width;
        }
        if let Some(&interval) = matches.get_one::<u64>("interval") {
            config.interval_ms = interval;
        }
        if let Some(&seed) = matches.get_one::<u64>("seed") {
            config.seed = Some(seed);
        }
        config.validate()?;

        Ok(Args {
            config,
            log_file: matches.get_one::<PathBuf>("log-file").cloned(),
        })
    }
}
