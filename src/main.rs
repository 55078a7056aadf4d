mod api;
mod app;
mod config;
mod events;
mod logging;
mod models;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

use api::GeminiClient;
use app::App;
use events::AppEvent;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_tracing();

    let app_config = config::load_config()?;
    let api_key = config::api_key_from_env()?;
    let client = GeminiClient::new(
        app_config.api_base_url.clone(),
        app_config.model.clone(),
        api_key,
        app_config.request_timeout,
    )?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(app_config.model);

    // Channel for settlement events from the spawned request task
    let (tx, mut rx) = mpsc::unbounded_channel::<AppEvent>();

    let res = run_app(&mut terminal, &mut app, &client, &tx, &mut rx);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

/// Returns true when the key was consumed by the help overlay.
const fn handle_help_keys(app: &mut App, key: KeyCode, modifiers: event::KeyModifiers) -> bool {
    if !app.show_help {
        return false;
    }

    match key {
        KeyCode::Char('h') if modifiers.contains(event::KeyModifiers::CONTROL) => {
            app.toggle_help();
        }
        KeyCode::Esc => {
            app.show_help = false;
        }
        _ => {}
    }
    true
}

fn handle_keyboard_input(
    app: &mut App,
    key: KeyCode,
    modifiers: event::KeyModifiers,
    client: &GeminiClient,
    event_tx: &mpsc::UnboundedSender<AppEvent>,
) {
    match key {
        KeyCode::Char('c') if modifiers.contains(event::KeyModifiers::CONTROL) => {
            if app.exit_pending {
                app.quit();
            } else {
                app.exit_pending = true;
            }
            return;
        }
        KeyCode::Esc => {
            if app.exit_pending {
                app.exit_pending = false;
            }
            return;
        }
        _ if app.exit_pending => {
            // Any other key cancels pending exit
            app.exit_pending = false;
        }
        _ => {}
    }

    match key {
        KeyCode::Char('q') if modifiers.contains(event::KeyModifiers::CONTROL) => {
            app.quit();
        }
        KeyCode::Char('h') if modifiers.contains(event::KeyModifiers::CONTROL) => {
            app.toggle_help();
        }

        // Navigation keys scroll the results pane
        KeyCode::Up => app.scroll_up(1),
        KeyCode::Down => app.scroll_down(1),
        KeyCode::PageUp => app.scroll_up(10),
        KeyCode::PageDown => app.scroll_down(10),
        KeyCode::Home => app.scroll_to_top(),
        KeyCode::End => app.scroll_to_bottom(),

        // Editing keys affect the feedback input
        KeyCode::Backspace => app.pop_input(),
        KeyCode::Enter if !app.is_loading() => {
            dispatch_analysis(app, client, event_tx);
        }

        KeyCode::Char(c) => app.push_input(c),

        _ => {}
    }
}

/// Runs the analyze trigger; if the controller accepts it, spawns the single
/// request task whose settlement comes back over the event channel.
fn dispatch_analysis(
    app: &mut App,
    client: &GeminiClient,
    event_tx: &mpsc::UnboundedSender<AppEvent>,
) {
    let Some(feedback) = app.start_analysis() else {
        return;
    };

    let client = client.clone();
    let tx = event_tx.clone();

    tokio::spawn(async move {
        match client.analyze_feedback(&feedback).await {
            Ok(result) => {
                let _ = tx.send(AppEvent::AnalysisComplete(result));
            }
            Err(e) => {
                let _ = tx.send(AppEvent::AnalysisFailed(e.to_string()));
            }
        }
    });
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    client: &GeminiClient,
    event_tx: &mpsc::UnboundedSender<AppEvent>,
    event_rx: &mut mpsc::UnboundedReceiver<AppEvent>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Apply any settled analysis before handling input
        if let Ok(app_event) = event_rx.try_recv() {
            app.finish_analysis(app_event);
        }

        // ~60fps poll keeps the loading indicator responsive
        if event::poll(Duration::from_millis(16))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if handle_help_keys(app, key.code, key.modifiers) {
                        continue;
                    }

                    handle_keyboard_input(app, key.code, key.modifiers, client, event_tx);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
