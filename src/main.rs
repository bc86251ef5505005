use std::io::{self, stdout};
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    event::{self, Event},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;

mod app;
mod chatbot;
mod cli;
mod deferred;
mod error;
mod flow;
mod forms;
mod keymap;
mod logging;
mod models;
mod pages;
mod password;
mod router;
mod text;
mod theme;
mod ui;
mod watcher;

use app::App;
use cli::{CliConfig, VERSION};
use logging::{init_logging, LogConfig};
use router::CheatSheetId;

fn main() -> io::Result<()> {
    let config = CliConfig::parse();

    if let Some(tag) = &config.print {
        let id = CheatSheetId::parse(tag).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("unknown cheat sheet '{tag}'"),
            )
        })?;
        print!("{}", pages::render_plain(pages::cheat_sheet(id), 80));
        return Ok(());
    }

    init_logging(&LogConfig::from_verbosity(
        config.verbose,
        config.log_file.clone(),
    ))?;
    tracing::info!(version = VERSION, page = %config.page, "starting secureguard");

    let (catalog, catalog_path) =
        watcher::find_catalog(config.content.as_deref()).map_err(io::Error::other)?;
    let mut app = App::new(catalog, catalog_path.clone(), &config.page);

    // Held for the lifetime of the loop; dropping it stops watching
    let _watcher = match catalog_path {
        Some(path) if !config.no_watch => {
            watcher::setup_catalog_watcher(path, app.catalog_needs_reload.clone())
        }
        _ => None,
    };

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Run the app
    let result = run(
        &mut terminal,
        &mut app,
        Duration::from_millis(config.tick_rate),
    );

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    if let Err(err) = &result {
        tracing::error!(error = %err, "event loop failed");
    }
    tracing::info!("exiting secureguard");
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tick_rate: Duration,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if let Some(action) = keymap::map_key(app.mode, key) {
                    app.handle_action(action);
                }
            }
        }

        app.reload_catalog_if_needed();
        app.update(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
