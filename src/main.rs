//! FitTrack - command line fitness tracker
//!
//! Main entry point for the application.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fittrack::config::{self, AppConfig};
use fittrack::{Console, Session};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// fittrack - log workouts and track fitness goals
#[derive(Parser)]
#[command(name = "fittrack", version)]
#[command(about = "Log workouts and track fitness goals", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter (overrides config file, RUST_LOG wins over both)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive tracker (default)
    Run,
    /// Run commands from a file, one per line
    Script {
        /// File with one command per line
        file: PathBuf,
    },
    /// Write the default configuration file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(config::get_config_path);

    // init-config never parses the file it replaces
    let script = match cli.command.unwrap_or(Commands::Run) {
        Commands::InitConfig { force } => return init_config(&config_path, force),
        Commands::Run => None,
        Commands::Script { file } => Some(file),
    };

    let app_config = config::load_config_from(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| app_config.logging.level.clone());
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!("Starting FitTrack v{}", env!("CARGO_PKG_VERSION"));

    match script {
        Some(file) => run_script(&file),
        None => run_interactive(&app_config),
    }
}

fn run_interactive(app_config: &AppConfig) -> Result<()> {
    let mut session = Session::new();
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock())
        .with_menu(app_config.console.show_menu)
        .with_greeting(app_config.console.greeting);

    console.run(&mut session).context("console I/O failed")
}

fn run_script(file: &Path) -> Result<()> {
    let input = File::open(file).with_context(|| format!("opening {}", file.display()))?;

    let mut session = Session::new();
    let mut console = Console::new(BufReader::new(input), io::stdout().lock());

    console.run_script(&mut session).context("script I/O failed")
}

fn init_config(path: &Path, force: bool) -> Result<()> {
    config::init_config(path, force).with_context(|| format!("writing {}", path.display()))?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}
