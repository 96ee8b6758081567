use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::ColorMode;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "ziglint")]
#[command(author, version, about = "A configurable linter for Zig source files")]
#[command(long_about = "Lints .zig files for style and correctness faults.\n\n\
    Exit codes:\n  \
    0   - No error-severity faults found\n  \
    1-N - Number of error-severity faults (capped at 255)\n  \
    2   - Fatal error (bad path, worker pool failure)")]
pub struct Cli {
    /// Paths to lint (files or directories)
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Path to configuration file (default: nearest ziglint.json upward)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Exclude patterns (gitignore-like syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Include patterns that override excludes
    #[arg(long, short = 'I')]
    pub include: Vec<String>,

    /// Maximum line length (overrides config)
    #[arg(long)]
    pub max_line_length: Option<usize>,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Suppress fault output, only set the exit code
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
