//! Configuration and CLI argument handling

use std::{path::PathBuf, time::Duration};

use clap::Parser;

use crate::persistence::{FileStorage, DEFAULT_SAVE_INTERVAL};
use crate::tasks::TICK_PERIOD;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "task-timer")]
#[command(about = "A terminal countdown timer with a persistent task log")]
#[command(version)]
pub struct Config {
    /// Directory holding the saved state (defaults to the platform data dir)
    #[arg(long)]
    pub state_dir: Option<PathBuf>,

    /// Minimum milliseconds between state writes
    #[arg(long, default_value_t = DEFAULT_SAVE_INTERVAL.as_millis() as u64)]
    pub save_interval_ms: u64,

    /// Milliseconds between countdown ticks
    #[arg(
        long,
        default_value_t = TICK_PERIOD.as_millis() as u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub tick_ms: u64,

    /// Write logs to this file; logging is off when unset
    #[arg(long, env = "TASK_TIMER_LOG")]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Ignore any saved state and start from the defaults
    #[arg(long)]
    pub fresh: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Directory the snapshot is stored in
    pub fn state_dir(&self) -> PathBuf {
        self.state_dir
            .clone()
            .unwrap_or_else(FileStorage::default_dir)
    }

    pub fn save_interval(&self) -> Duration {
        Duration::from_millis(self.save_interval_ms)
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
