mod app;
mod cli;
mod config;
mod logging;
mod remote;
mod rings;
mod runtime;
mod schedule;
mod theme;
mod time_utils;
mod ui;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use app::App;
use cli::{Cli, Commands};
use config::DayringConfig;
use remote::Remote;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Run) {
        Commands::ConfigPath => {
            let path = DayringConfig::config_path()?;
            if !path.exists() {
                DayringConfig::default().save()?;
            }
            println!("{}", path.display());
            Ok(())
        }
        Commands::Run => run(false).await,
        Commands::Dev => run(true).await,
    }
}

async fn run(dev_mode: bool) -> Result<()> {
    let config = DayringConfig::load()?;
    let _log_guard = logging::init()?;
    tracing::info!(dev_mode, "dayring starting");

    let mut remote = if dev_mode {
        Remote::dev()
    } else {
        Remote::from_config(&config)
    };
    let mut app = App::new(config, time_utils::local_now());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = runtime::run_app(&mut terminal, &mut app, &mut remote).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
