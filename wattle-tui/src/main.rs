//! Terminal UI for wattle: the household bin schedule and a Monster Hunter
//! item tracker, on one home menu.

mod app;
mod input;
mod store;
mod theme;
mod ui;

use std::{env, io, path::PathBuf, sync::Arc, time::Duration as StdDuration};

use anyhow::{Context, Result};
use chrono::Utc;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use reqwest::Client;
use tracing_subscriber::EnvFilter;
use wattle_core::service::WattleService;
use wattle_provider_mhw as mhw;
use wattle_provider_vic as vic;

use crate::app::App;
use crate::input::Action;
use crate::store::{DEFAULT_STORE_FILE, InventoryStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Logging goes to stderr and stays silent unless RUST_LOG asks for it.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // HTTP + service setup
    let client = Client::builder().user_agent("wattle/0.1").build()?;

    let holiday_port = vic::port().context("loading bundled holiday dataset")?;
    let catalog_port = mhw::catalog(client);
    let service = Arc::new(WattleService::new(holiday_port, catalog_port));

    let store_path = env::var_os("WATTLE_INVENTORY")
        .map_or_else(|| PathBuf::from(DEFAULT_STORE_FILE), PathBuf::from);
    let store = InventoryStore::new(store_path);

    // App state
    let app = App::new(service, store);

    // Terminal init
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run event loop
    let res = run(&mut terminal, app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

async fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        // Draw current UI
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Poll for input (non-blocking, small timeout to keep CPU low)
        if event::poll(StdDuration::from_millis(100))?
            && let CEvent::Key(key) = event::read()?
        {
            let action = input::handle_key_event(key, &mut app);

            match action {
                Action::Quit => break,
                Action::None => {}
                Action::LoadBinSchedule => {
                    app.is_loading = true;
                    app.error_message = None;
                    terminal.draw(|frame| ui::draw(frame, &app))?;

                    let res = app.service.bin_schedule(Utc::now(), app.schedule_mode).await;

                    app.is_loading = false;
                    match res {
                        Ok(info) => {
                            app.schedule = Some(info);
                            app.schedule_unavailable = None;
                        }
                        Err(err) => {
                            // Never show a guessed date.
                            app.schedule = None;
                            app.schedule_unavailable = Some(err.to_string());
                        }
                    }
                }
                Action::LoadCatalog => {
                    app.is_loading = true;
                    app.error_message = None;
                    terminal.draw(|frame| ui::draw(frame, &app))?;

                    let res = app.service.catalog_items().await;

                    app.is_loading = false;
                    match res {
                        Ok(items) => {
                            app.catalog = items;
                            app.catalog_loaded = true;
                            app.refresh_search_results();
                        }
                        Err(err) => {
                            app.error_message = Some(format!("Failed to load items: {err}"));
                        }
                    }
                }
                Action::PersistInventory => {
                    if let Err(err) = app.store.save(&app.inventory) {
                        app.error_message = Some(format!("Failed to save inventory: {err}"));
                    }
                }
            }
        }
    }

    Ok(())
}
