//! Refresh controller.
//!
//! Decides how often the collector runs and hands every new snapshot to a
//! `SnapshotSink`. The mode is fixed when the controller is built:
//! - `OneShot`: collect once, present, quit
//! - `Follow`: collect once at start, then once per control-loop event
//!   (key press, resize or timer tick) until a quit key arrives

use std::io::{self, Write};
use std::time::Duration;

use tracing::debug;

use crate::fmt::render_report;
use crate::model::Snapshot;
use crate::provider::SnapshotProvider;
use crate::tui::{Event, KeyAction, handle_key};

/// Default follow-mode timer interval.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// How snapshots are refreshed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshMode {
    /// Collect and present exactly once.
    OneShot,
    /// Keep collecting until the user quits. `interval` is the timer tick
    /// delivered by the control loop when no input arrives.
    Follow { interval: Duration },
}

impl RefreshMode {
    /// Builds the mode from the `--follow` flag and tick interval.
    pub fn from_flags(follow: bool, interval: Duration) -> Self {
        if follow {
            RefreshMode::Follow { interval }
        } else {
            RefreshMode::OneShot
        }
    }
}

/// What the control loop should do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Quit,
}

/// Receives each snapshot by value.
pub trait SnapshotSink {
    fn present(&mut self, snapshot: Snapshot) -> io::Result<()>;
}

/// Sink that writes the text report to any writer (stdout in one-shot mode).
pub struct TextSink<W: Write> {
    out: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SnapshotSink for TextSink<W> {
    fn present(&mut self, snapshot: Snapshot) -> io::Result<()> {
        self.out.write_all(render_report(&snapshot).as_bytes())?;
        self.out.flush()
    }
}

/// Drives a `SnapshotProvider` according to a `RefreshMode`.
pub struct RefreshController<P: SnapshotProvider> {
    provider: P,
    mode: RefreshMode,
    runs: usize,
    finished: bool,
}

impl<P: SnapshotProvider> RefreshController<P> {
    pub fn new(provider: P, mode: RefreshMode) -> Self {
        Self {
            provider,
            mode,
            runs: 0,
            finished: false,
        }
    }

    pub fn mode(&self) -> RefreshMode {
        self.mode
    }

    /// Number of collection passes run so far.
    pub fn runs(&self) -> usize {
        self.runs
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Runs the first collection and presents it.
    ///
    /// Returns `Step::Quit` in one-shot mode.
    pub fn start(&mut self, sink: &mut impl SnapshotSink) -> io::Result<Step> {
        if self.finished {
            return Ok(Step::Quit);
        }

        self.refresh(sink)?;

        match self.mode {
            RefreshMode::OneShot => Ok(self.quit()),
            RefreshMode::Follow { .. } => Ok(Step::Continue),
        }
    }

    /// Handles one control-loop event.
    ///
    /// A quit key stops the controller without collecting. Any other event
    /// triggers exactly one collection while in follow mode.
    pub fn on_event(&mut self, event: &Event, sink: &mut impl SnapshotSink) -> io::Result<Step> {
        if self.finished {
            return Ok(Step::Quit);
        }

        if let Event::Key(key) = event
            && handle_key(*key) == KeyAction::Quit
        {
            debug!("quit requested");
            return Ok(self.quit());
        }

        match self.mode {
            RefreshMode::OneShot => Ok(self.quit()),
            RefreshMode::Follow { .. } => {
                self.refresh(sink)?;
                Ok(Step::Continue)
            }
        }
    }

    /// Runs the controller to completion over a sequence of events.
    pub fn run<I>(&mut self, events: I, sink: &mut impl SnapshotSink) -> io::Result<()>
    where
        I: IntoIterator<Item = Event>,
    {
        if self.start(sink)? == Step::Quit {
            return Ok(());
        }
        for event in events {
            if self.on_event(&event, sink)? == Step::Quit {
                break;
            }
        }
        Ok(())
    }

    fn refresh(&mut self, sink: &mut impl SnapshotSink) -> io::Result<()> {
        let snapshot = self.provider.advance();
        self.runs += 1;
        match self.provider.collector_timing() {
            Some(timing) => debug!(run = self.runs, ?timing, "refreshed"),
            None => debug!(run = self.runs, fetch_duration = ?snapshot.fetch_duration, "refreshed"),
        }
        sink.present(snapshot)
    }

    fn quit(&mut self) -> Step {
        self.finished = true;
        Step::Quit
    }
}
