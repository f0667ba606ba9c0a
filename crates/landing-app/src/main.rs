use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use landing_app::config::load_config;
use landing_app::error::AppResult;
use landing_app::session::{run_session, SessionOptions};
use landing_core::config::GameConfig;

#[derive(clap::Parser, Debug)]
#[command(version, about = "Headless landing-planes session", long_about = None)]
struct Cli {
    /// JSON game configuration. Defaults apply to anything left out
    #[arg(long, short)]
    config: Option<PathBuf>,
    /// Seed for the aircraft generator
    #[arg(long)]
    seed: Option<u64>,
    /// How long to run before stopping, unless the game ends first
    #[arg(long, default_value_t = 60)]
    seconds: u64,
    /// Steer aircraft onto compatible landing sites
    #[arg(long)]
    autopilot: bool,
    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GameConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    let summary = run_session(
        config,
        &SessionOptions {
            duration: Duration::from_secs(cli.seconds),
            autopilot: cli.autopilot,
        },
    )?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
