//! Command-line interface parsing
//!
//! The configuration surface is two flags: `--refresh` to bypass cached
//! payloads for one run, and `--cache-dir` to relocate the cache.

use clap::Parser;
use std::path::PathBuf;

/// Launch Tracker - browse SpaceX launch history with filtering and statistics
#[derive(Parser, Debug)]
#[command(name = "launchtrack")]
#[command(about = "Browse SpaceX launch history with filtering and statistics")]
#[command(version)]
pub struct Cli {
    /// Ignore cached payloads this run and refetch from the API
    ///
    /// Fetched payloads are still written back, so a forced refresh
    /// repopulates the cache.
    #[arg(long)]
    pub refresh: bool,

    /// Directory for cached API payloads
    ///
    /// Defaults to the platform cache directory
    /// (`~/.cache/launchtrack/` on Linux).
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,
}
