use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use connect_four::config::{AppConfig, LogConfig};
use connect_four::ui::terminal::{self, TerminalGuard};
use connect_four::ui::{sound, App};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Two-player Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    config: PathBuf,

    /// Disable sound cues
    #[arg(long)]
    no_sound: bool,

    /// Disable mouse hover and click
    #[arg(long)]
    no_mouse: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if cli.no_sound {
        config.sound.enabled = false;
    }
    if cli.no_mouse {
        config.ui.mouse = false;
    }

    init_logging(&config.log)?;
    if !cli.config.exists() {
        warn!(path = %cli.config.display(), "config file not found, using defaults");
    }
    info!(sound = config.sound.enabled, mouse = config.ui.mouse, "starting");

    run(&config).context("running terminal UI")
}

/// Send `tracing` output to the configured log file; the terminal belongs to the UI.
fn init_logging(config: &LogConfig) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.file)
        .with_context(|| format!("opening log file {}", config.file.display()))?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)
            .with_context(|| format!("invalid log level '{}'", config.level))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}

fn run(config: &AppConfig) -> io::Result<()> {
    terminal::install_panic_hook(config.ui.mouse);
    let _guard = TerminalGuard::enter(io::stdout(), config.ui.mouse)?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, sound::from_config(&config.sound));
    app.run(&mut terminal)
}
