//! Per-frame event batching.
//!
//! The loop waits for input up to one tick, then drains everything already
//! queued so a burst of keys is handled within one frame.

use std::io;
use std::time::Duration;

use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::{handle_key_event, is_interrupt};
use crate::types::{Command, MAX_EVENTS_PER_FRAME};

/// Commands collected for one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBatch {
    pub commands: ArrayVec<Command, MAX_EVENTS_PER_FRAME>,
    pub interrupted: bool,
    pub resized: bool,
}

impl InputBatch {
    /// Fold one terminal event into the batch.
    ///
    /// Returns `false` once the batch is full; further events are left queued.
    pub fn push_event(&mut self, ev: Event) -> bool {
        match ev {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if is_interrupt(key) {
                    self.interrupted = true;
                } else if let Some(command) = handle_key_event(key) {
                    // Capacity is checked below before reading another event.
                    let _ = self.commands.try_push(command);
                }
            }
            Event::Resize(_, _) => self.resized = true,
            _ => {}
        }
        !self.commands.is_full()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && !self.interrupted && !self.resized
    }
}

/// Collect a batch from an event iterator (used by tests and replays).
pub fn collect_batch<I: IntoIterator<Item = Event>>(events: I) -> InputBatch {
    let mut batch = InputBatch::default();
    for ev in events {
        if !batch.push_event(ev) {
            break;
        }
    }
    batch
}

/// Wait up to `timeout` for the first event, then drain whatever is queued.
pub fn poll_batch(timeout: Duration) -> io::Result<InputBatch> {
    let mut batch = InputBatch::default();
    if !event::poll(timeout)? {
        return Ok(batch);
    }
    while batch.push_event(event::read()?) {
        if !event::poll(Duration::ZERO)? {
            break;
        }
    }
    Ok(batch)
}
