use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{backend::CrosstermBackend, Terminal};

use candy_sort::config::AppConfig;
use candy_sort::ui::App;

/// Sort scrambled candy columns in the terminal.
#[derive(Parser)]
#[command(name = "candy_sort", about = "Sort scrambled candy columns")]
struct Cli {
    /// Number of columns on the board
    #[arg(long)]
    columns: Option<usize>,

    /// Height of each column
    #[arg(long)]
    rows: Option<usize>,

    /// Seed for a reproducible game (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration and apply CLI overrides.
    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(columns) = cli.columns {
        app_config.game.columns = columns;
    }
    if let Some(rows) = cli.rows {
        app_config.game.rows = rows;
    }
    app_config.validate().context("invalid game parameters")?;

    // A game is reproducible from its seed; draw one when none was given.
    let seed = cli.seed.unwrap_or_else(|| StdRng::from_os_rng().random());
    let mut app = App::new(app_config.game, seed).context("setting up the first game")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("running the game loop")
}
