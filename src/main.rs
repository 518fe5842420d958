use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use connect_n::config::AppConfig;
use connect_n::ui::App;

/// Play Connect-N in the terminal.
#[derive(Parser)]
#[command(name = "connect_n", about = "Play Connect-N in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_n.toml")]
    config: PathBuf,

    /// Override board rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override board columns
    #[arg(long)]
    cols: Option<usize>,

    /// Override the number of pieces in a row needed to win
    #[arg(long)]
    win_len: Option<usize>,

    /// Override the number of players
    #[arg(long)]
    players: Option<usize>,

    /// Skip the menu and play one game with the configured settings
    #[arg(long)]
    quick: bool,

    /// Do not clear the screen between redraws
    #[arg(long)]
    no_clear: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Log filter used when RUST_LOG is not set (logs go to stderr)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    init_logging(&cli.log_level)?;

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(rows) = cli.rows {
        config.game.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.game.cols = cols;
    }
    if let Some(win_len) = cli.win_len {
        config.game.win_len = win_len;
    }
    if let Some(players) = cli.players {
        config.game.players = players;
    }
    if cli.no_clear {
        config.display.clear_screen = false;
    }
    config.validate().context("invalid game settings")?;

    let mut app = App::new(io::stdin().lock(), io::stdout(), &config)?;
    if cli.quick {
        app.play(config.game.params())?;
    } else {
        app.run()?;
    }

    Ok(())
}

fn init_logging(level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid log level '{level}'"))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    Ok(())
}
