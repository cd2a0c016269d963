//! Main TUI application.

use std::io;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use tracing::{debug, info};

use crate::model::Snapshot;
use crate::provider::SnapshotProvider;
use crate::refresh::{DEFAULT_INTERVAL, RefreshController, RefreshMode, SnapshotSink, Step};

use super::event::EventHandler;
use super::render::render;

/// Sink that redraws the whole screen for every snapshot.
pub struct TerminalView<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> TerminalView<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self { terminal }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

impl<B: Backend> SnapshotSink for TerminalView<B> {
    fn present(&mut self, snapshot: Snapshot) -> io::Result<()> {
        self.terminal.draw(|frame| render(frame, &snapshot))?;
        Ok(())
    }
}

/// Follow-mode application: owns the terminal and feeds control-loop
/// events to the refresh controller.
pub struct App<P: SnapshotProvider> {
    controller: RefreshController<P>,
}

impl<P: SnapshotProvider> App<P> {
    pub fn new(controller: RefreshController<P>) -> Self {
        Self { controller }
    }

    /// Runs until a quit key arrives. The terminal is restored on every
    /// exit path, including draw errors.
    pub fn run(mut self) -> io::Result<()> {
        let tick_rate = match self.controller.mode() {
            RefreshMode::Follow { interval } => interval,
            RefreshMode::OneShot => DEFAULT_INTERVAL,
        };

        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(e) => {
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                let _ = disable_raw_mode();
                return Err(e);
            }
        };
        let mut view = TerminalView::new(terminal);

        info!(?tick_rate, "follow mode started");
        let events = EventHandler::new(tick_rate);
        let result = self.event_loop(&mut view, &events);

        // Restore terminal
        let restored = restore(&mut view.terminal);
        info!(runs = self.controller.runs(), "follow mode stopped");

        result.and(restored)
    }

    fn event_loop<B: Backend>(
        &mut self,
        view: &mut TerminalView<B>,
        events: &EventHandler,
    ) -> io::Result<()> {
        if self.controller.start(view)? == Step::Quit {
            return Ok(());
        }

        loop {
            let event = match events.next() {
                Ok(event) => event,
                Err(_) => {
                    debug!("event channel closed");
                    return Ok(());
                }
            };
            if self.controller.on_event(&event, view)? == Step::Quit {
                return Ok(());
            }
        }
    }
}

fn restore<B: Backend + io::Write>(terminal: &mut Terminal<B>) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let cursor = terminal.show_cursor();
    raw.and(screen).and(cursor)
}
