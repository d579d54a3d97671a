//! Main application state and UI loop

use crate::environment::Environment;
use crate::events::Event as WorkerEvent;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{Terminal, backend::Backend};
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};

/// How long one loop iteration waits for a key press before redrawing.
const INPUT_POLL: Duration = Duration::from_millis(100);

#[derive(Debug)]
pub struct App {
    /// Dashboard view state, mutated only by applying worker events.
    state: DashboardState,

    /// Receives events from the fetch worker.
    event_receiver: mpsc::Receiver<WorkerEvent>,

    /// Broadcasts the shutdown signal to the fetch worker.
    shutdown_sender: broadcast::Sender<()>,
}

impl App {
    pub fn new(
        environment: Environment,
        event_receiver: mpsc::Receiver<WorkerEvent>,
        shutdown_sender: broadcast::Sender<()>,
    ) -> Self {
        Self {
            state: DashboardState::new(environment),
            event_receiver,
            shutdown_sender,
        }
    }
}

fn is_quit_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q'))
}

/// The render/input loop: drain worker events into the state, apply them,
/// draw, then wait briefly for input. Quit keys broadcast shutdown and return.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    loop {
        while let Ok(event) = app.event_receiver.try_recv() {
            app.state.add_event(event);
        }
        app.state.update();

        terminal.draw(|f| render_dashboard(f, &app.state))?;

        if event::poll(INPUT_POLL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if is_quit_key(key.code) {
                    let _ = app.shutdown_sender.send(());
                    return Ok(());
                }
            }
        }
    }
}
