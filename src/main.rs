//! Launch Tracker - browse SpaceX launch history
//!
//! Fetches launch records from the public SpaceX API through a 24-hour
//! disk cache, resolves rocket and launchpad names, and opens an
//! interactive menu for filtering and statistics.

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use launchtrack::api::SpaceXClient;
use launchtrack::cache::CacheStore;
use launchtrack::cli::Cli;
use launchtrack::data::LaunchRepository;
use launchtrack::shell;

/// Diagnostics go to stderr so the menu on stdout stays clean.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let cache = match cli.cache_dir {
        Some(dir) => Some(CacheStore::with_dir(dir)),
        None => CacheStore::new(),
    };
    if cache.is_none() {
        warn!("no usable cache directory, running without caching");
    }

    let repository = LaunchRepository::new(SpaceXClient::new(), cache, cli.refresh);
    let launches = repository.get_launches();
    println!("Total launches fetched: {}", launches.len());

    shell::run(&launches);
}
