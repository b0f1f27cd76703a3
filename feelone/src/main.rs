//! feelone - emotion check-in demo
//!
//! Terminal UI that asks how you feel, pretends to analyze the answer, and
//! shows a canned result. Nothing leaves the process and nothing is saved.
//!
//! Uses XDG Base Directory specification for file locations:
//! - Config: $XDG_CONFIG_HOME/feelone/config.toml (~/.config/feelone/config.toml)
//! - Logs: $XDG_STATE_HOME/feelone/feelone.log.YYYY-MM-DD (~/.local/state/feelone/)

mod app;
mod ui;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use feelone_core::{Config, Controller};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::App;

#[derive(Parser)]
#[command(name = "feelone")]
#[command(about = "Emotion check-in demo for the terminal")]
#[command(version)]
struct Args {
    /// Read configuration from this file instead of the XDG default
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Show the demo notices (overrides config)
    #[arg(long, conflicts_with = "no_notices")]
    notices: bool,

    /// Hide the demo notices (overrides config)
    #[arg(long)]
    no_notices: bool,

    /// Seed for picking results, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Print the resolved configuration and exit
    #[arg(long)]
    print_config: bool,
}

impl Args {
    /// Load the config file and apply command-line overrides.
    fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)
                .with_context(|| format!("failed to load configuration from {}", path.display()))?,
            None => Config::load().context("failed to load configuration")?,
        };

        if self.notices {
            config.demo.show_notices = true;
        }
        if self.no_notices {
            config.demo.show_notices = false;
        }

        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.resolve_config()?;

    if args.print_config {
        print!("{}", config.to_toml().context("failed to render configuration")?);
        return Ok(());
    }

    // Initialize logging (to file, not stdout since we have a TUI)
    let _log_guard =
        feelone_core::logging::init(&config.logging).context("failed to initialize logging")?;

    tracing::info!(
        show_notices = config.demo.show_notices,
        seed = ?args.seed,
        "feelone starting up"
    );

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let controller = Controller::new(config.demo.show_notices, config.timing.clone(), rng);
    let mut app = App::new(controller);

    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    // Run the main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor().context("failed to show cursor")?;

    tracing::info!("feelone shutting down");

    result
}

/// Run the main application loop.
fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        // Fire any screen timers that came due while we waited
        app.tick();

        terminal.draw(|frame| ui::render(frame, app))?;

        // Wait for a key, but never past the next timer deadline
        if event::poll(app.poll_timeout())? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
