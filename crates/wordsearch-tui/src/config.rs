use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use wordsearch_core::{PuzzleConfig, PuzzleError, UnplacedPolicy};

use crate::theme::Theme;

/// Find the hidden words by dragging across the grid
#[derive(Debug, Parser)]
#[command(name = "wordsearch", version, about)]
pub struct Cli {
    /// Grid side length
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Comma-separated words to hide
    #[arg(short, long, value_delimiter = ',')]
    pub words: Option<Vec<String>>,

    /// Seed for reproducible puzzles
    #[arg(long)]
    pub seed: Option<u64>,

    /// Placement attempts per word
    #[arg(long)]
    pub max_attempts: Option<usize>,

    /// Regenerate the whole grid up to this many times when a word won't fit
    #[arg(long, value_name = "ROUNDS")]
    pub regenerate: Option<usize>,

    /// Color theme: dark, light or high-contrast
    #[arg(short, long)]
    pub theme: Option<String>,

    /// Settings file (defaults to <config dir>/wordsearch/config.json)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print a puzzle and exit instead of starting the UI
    #[arg(long)]
    pub print: bool,

    /// With --print, emit JSON including placements
    #[arg(long, requires = "print")]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// Settings file contents. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub size: Option<usize>,
    pub words: Option<Vec<String>>,
    pub max_attempts: Option<usize>,
    pub regenerate: Option<usize>,
    pub theme: Option<String>,
}

/// Problems turning flags and settings into a runnable configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("invalid settings in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Puzzle(#[from] PuzzleError),

    #[error("unknown theme {0:?} (expected one of: {})", Theme::NAMES.join(", "))]
    UnknownTheme(String),
}

/// Fully resolved run configuration
pub struct RunConfig {
    pub puzzle: PuzzleConfig,
    pub theme: Theme,
    pub seed: Option<u64>,
}

impl Settings {
    /// Default settings file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("wordsearch").join("config.json"))
    }

    /// Load settings from `path`
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the explicitly requested file, or the default one if it exists
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load(&path),
                _ => Ok(Self::default()),
            },
        }
    }
}

impl RunConfig {
    /// Merge settings with command-line flags. Flags win.
    pub fn resolve(cli: &Cli, settings: Settings) -> Result<Self, ConfigError> {
        let mut puzzle = PuzzleConfig::default();

        if let Some(size) = cli.size.or(settings.size) {
            puzzle.size = size;
        }
        if let Some(words) = cli.words.clone().or(settings.words) {
            puzzle.words = words;
        }
        if let Some(attempts) = cli.max_attempts.or(settings.max_attempts) {
            puzzle.generator.max_attempts = attempts;
        }
        if let Some(max_rounds) = cli.regenerate.or(settings.regenerate) {
            puzzle.generator.unplaced_policy = UnplacedPolicy::Regenerate { max_rounds };
        }

        let theme = match cli.theme.clone().or(settings.theme) {
            Some(name) => Theme::by_name(&name).ok_or(ConfigError::UnknownTheme(name))?,
            None => Theme::default(),
        };

        Ok(Self {
            puzzle: puzzle.validated()?,
            theme,
            seed: cli.seed,
        })
    }
}
