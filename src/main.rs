use std::time::Duration;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use tokio::sync::watch;

use confdeck::app::{App, AppMessage};
use confdeck::cli::{apply_overrides, parse_args, run_cli_command, CliCommand};
use confdeck::conference::ConferenceClient;
use confdeck::config::AppConfig;
use confdeck::logging::init_logging;
use confdeck::store::{ConferenceStore, LoadState};
use confdeck::terminal::{setup_panic_hook, TerminalManager};
use confdeck::ui;

/// Spinner frame interval while loading
const TICK: Duration = Duration::from_millis(80);

fn main() -> Result<()> {
    // CLI-only commands never touch the terminal
    let command = parse_args(std::env::args());
    if let Some(code) = run_cli_command(&command) {
        std::process::exit(code);
    }
    let CliCommand::Run(options) = command else {
        return Ok(());
    };

    color_eyre::install()?;

    let config = apply_overrides(AppConfig::from_env(), &options);
    if let Some(path) = init_logging(&config) {
        tracing::info!("Logging to {}", path.display());
    }

    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(config))
}

async fn run(config: AppConfig) -> Result<()> {
    let store = ConferenceStore::new();
    let state_rx = store.subscribe();
    store.spawn_fetch(ConferenceClient::with_endpoint(config.endpoint.clone()));

    let mut manager = TerminalManager::new()?;
    let mut app = App::new(config);
    if let Ok(size) = manager.terminal().size() {
        app.handle_message(AppMessage::Resized {
            width: size.width,
            height: size.height,
        });
    }

    let result = run_app(manager.terminal(), &mut app, state_rx).await;
    manager.restore()?;
    tracing::info!("Exiting");
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    mut state_rx: watch::Receiver<LoadState>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut store_open = true;

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = tokio::time::sleep(TICK) => {
                app.tick();
            }

            changed = state_rx.changed(), if store_open => {
                match changed {
                    Ok(()) => {
                        let state = state_rx.borrow_and_update().clone();
                        app.handle_message(AppMessage::LoadStateChanged(state));
                    }
                    // Sender gone; the last state stays in effect
                    Err(_) => store_open = false,
                }
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Resize(width, height))) => {
                        app.handle_message(AppMessage::Resized { width, height });
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!("Terminal event error: {}", e);
                    }
                    None => app.quit(),
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
