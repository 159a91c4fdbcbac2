mod app;
mod config;
mod launch;
mod logging;
mod probe;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::probe::ImageProber;
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Load config
    let cfg = config::load_config()?;

    if let Some(path) = logging::init(&cfg.logging)? {
        tracing::info!(log = %path.display(), "folio starting");
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if cfg.ui.mouse {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "exiting with error");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let prober = ImageProber::new(
        event_tx.clone(),
        Duration::from_millis(cfg.portfolio.probe_timeout_ms),
    );
    let mut state = AppState::new(cfg);
    let size = terminal.size()?;
    state.set_viewport(size.width, size.height);

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // Kick off image probes
    for action in state.image_probe_actions() {
        perform(&mut state, &prober, action);
    }

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;
    state.dirty = false;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);
        for action in actions {
            perform(&mut state, &prober, action);
        }

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    tracing::info!("folio exiting");
    Ok(())
}

fn perform(state: &mut AppState, prober: &ImageProber, action: Action) {
    match action {
        Action::Quit => {
            state.should_quit = true;
        }
        Action::OpenUrl { url } => {
            match launch::open(&url) {
                Ok(()) => state.status_message = Some(format!("Opening {}", url)),
                Err(e) => {
                    tracing::warn!(%url, error = %e, "failed to open link");
                    state.status_message = Some(format!("Could not open link: {}", e));
                }
            }
            state.dirty = true;
        }
        Action::ComposeMail { address } => {
            match launch::open(&launch::mailto(&address)) {
                Ok(()) => state.status_message = Some(format!("Composing mail to {}", address)),
                Err(e) => {
                    tracing::warn!(%address, error = %e, "failed to start mail client");
                    state.status_message = Some(format!("Could not start mail client: {}", e));
                }
            }
            state.dirty = true;
        }
        Action::ProbeImage { project, url } => {
            tracing::debug!(project, %url, "probing image");
            prober.spawn(project, url);
        }
    }
}
