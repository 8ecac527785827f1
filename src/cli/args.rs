//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::consts::SESSION_FILE_ENV;
use crate::session::FileSessionStore;

use super::commands::Commands;

#[derive(Debug, Parser)]
#[command(name = "aoc")]
#[command(about = "Download Advent of Code inputs and submit answers", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// File holding the session cookie
    #[arg(long, global = true, value_name = "PATH", env = SESSION_FILE_ENV)]
    pub(crate) session_file: Option<PathBuf>,

    /// Enable debug output on stderr
    #[arg(long, global = true)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.debug && config.debug {
            self.debug = true;
        }
        if self.session_file.is_none() {
            self.session_file = config.session_file.clone();
        }
        self
    }

    pub(crate) fn session_path(&self) -> PathBuf {
        self.session_file
            .clone()
            .unwrap_or_else(FileSessionStore::default_path)
    }
}
