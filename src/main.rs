use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use chipsearch::app::{
    config::{self, Config},
    r#loop::run_loop,
    state::AppState,
};
use chipsearch::domain::{catalog::builtin_catalog, models::Item};
use chipsearch::infrastructure::{catalog_file, logging};

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

fn load_items(config: &Config) -> Vec<Item> {
    let Some(path) = &config.catalog_path else {
        return builtin_catalog();
    };
    match catalog_file::load_catalog(path) {
        Ok(items) => {
            tracing::info!(path = %path.display(), users = items.len(), "catalog loaded");
            items
        }
        Err(err) => {
            tracing::warn!(%err, "falling back to the built-in catalog");
            eprintln!("chipsearch: {err}; using the built-in user list");
            builtin_catalog()
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_hook();

    // Everything that can fail on bad input happens before the terminal
    // enters raw mode.
    if let Some(dir) = config::get_config_dir() {
        if let Err(err) = logging::init(&dir.join("chipsearch.log")) {
            eprintln!("chipsearch: logging disabled: {err:#}");
        }
    }

    let config = Config::load().unwrap_or_else(|err| {
        tracing::warn!(%err, "using default config");
        eprintln!("chipsearch: {err}; using defaults");
        Config::default()
    });
    let app_state = AppState::new(&config, load_items(&config));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    let selection = res?;
    for item in selection.items() {
        println!("{item}");
    }

    Ok(())
}
