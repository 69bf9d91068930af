//! Timer-driven typewriter component.

use std::time::Duration;

use folio_core::{TimerId, Timers};

use crate::machine::{Direction, Typewriter};

/// Where the caption text is written after every tick.
pub trait TextOutput {
    fn write_text(&mut self, text: &str);
}

impl TextOutput for String {
    fn write_text(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

/// Keeps every written caption, oldest first.
impl TextOutput for Vec<String> {
    fn write_text(&mut self, text: &str) {
        self.push(text.to_string());
    }
}

/// Per-character delays for each direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub typing: Duration,
    pub erasing: Duration,
}

impl Timing {
    pub fn delay_for(&self, direction: Direction) -> Duration {
        match direction {
            Direction::Typing => self.typing,
            Direction::Erasing => self.erasing,
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            typing: Duration::from_millis(65),
            erasing: Duration::from_millis(35),
        }
    }
}

/// Drives a [`Typewriter`] from single-shot timers.
///
/// After every tick the timer is re-armed with the delay of the direction the
/// machine is now in, so typing and erasing run at different speeds. At most
/// one timer is outstanding; [`TypewriterLoop::stop`] cancels it and any later
/// wakeup is ignored.
#[derive(Debug)]
pub struct TypewriterLoop<O: TextOutput> {
    machine: Typewriter,
    timing: Timing,
    output: O,
    /// The single outstanding timer, if running.
    pending: Option<TimerId>,
}

impl<O: TextOutput> TypewriterLoop<O> {
    pub fn new(machine: Typewriter, timing: Timing, output: O) -> Self {
        Self {
            machine,
            timing,
            output,
            pending: None,
        }
    }

    /// Show the current text and arm the first tick.
    pub fn start<T>(&mut self, timers: &mut T)
    where
        T: Timers + ?Sized,
    {
        self.output.write_text(self.machine.text());
        self.arm(timers);
        tracing::debug!(phrases = self.machine.phrases().len(), "typewriter started");
    }

    /// Handle a fired timer. Returns true if the caption changed.
    ///
    /// Timers this component does not own (stale or cancelled) are ignored.
    pub fn on_timer<T>(&mut self, id: TimerId, timers: &mut T) -> bool
    where
        T: Timers + ?Sized,
    {
        if self.pending != Some(id) {
            return false;
        }
        self.pending = None;

        let text = self.machine.tick();
        self.output.write_text(text);
        self.arm(timers);
        true
    }

    /// Cancel the outstanding timer. Safe to call repeatedly.
    pub fn stop<T>(&mut self, timers: &mut T)
    where
        T: Timers + ?Sized,
    {
        if let Some(id) = self.pending.take() {
            timers.clear_timeout(id);
            tracing::debug!("typewriter stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    pub fn machine(&self) -> &Typewriter {
        &self.machine
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    /// Arm the next tick, replacing any outstanding timer.
    fn arm<T>(&mut self, timers: &mut T)
    where
        T: Timers + ?Sized,
    {
        if let Some(previous) = self.pending.take() {
            timers.clear_timeout(previous);
        }
        let delay = self.timing.delay_for(self.machine.direction());
        self.pending = Some(timers.set_timeout(delay));
    }
}
