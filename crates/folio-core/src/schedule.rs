//! Host scheduling facilities.
//!
//! Animated components never own a thread or a clock. They ask the host for a
//! callback, either "before the next repaint" or "once after a delay", and
//! keep the returned handle. The host later reports the handle back as a
//! [`Wakeup`]; a component only acts on wakeups carrying the handle it still
//! owns, so a cancelled or superseded request can never cause an update.

use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

/// Handle for a pending "before next repaint" callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameRequest(u64);

/// Handle for a pending single-shot timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Host facility that invokes a callback once before the next repaint.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameRequest;
    fn cancel_frame(&mut self, request: FrameRequest);
}

/// Host facility that invokes a callback once after a delay.
pub trait Timers {
    fn set_timeout(&mut self, delay: Duration) -> TimerId;
    fn clear_timeout(&mut self, id: TimerId);
}

/// A callback that became due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wakeup {
    Frame(FrameRequest),
    Timer(TimerId),
}

/// Single-threaded scheduler on a millisecond timeline.
///
/// The event loop calls [`HostScheduler::advance_to`] with the elapsed time
/// and dispatches the returned wakeups. Frame requests fire together at each
/// repaint boundary (multiples of the frame interval); timers fire once their
/// deadline has passed, earliest first.
#[derive(Debug)]
pub struct HostScheduler {
    /// Current time on the host timeline.
    now_ms: u64,
    /// Milliseconds between repaints.
    frame_interval_ms: u64,
    /// Time of the next repaint boundary.
    next_repaint_ms: u64,
    /// Source of handle ids, shared by frames and timers.
    next_id: u64,
    /// Outstanding frame requests.
    frames: BTreeSet<u64>,
    /// Outstanding timers, id to deadline.
    timers: BTreeMap<u64, u64>,
}

impl HostScheduler {
    /// Create a scheduler repainting every `frame_interval`.
    pub fn new(frame_interval: Duration) -> Self {
        Self {
            now_ms: 0,
            frame_interval_ms: (frame_interval.as_millis() as u64).max(1),
            next_repaint_ms: 0,
            next_id: 1,
            frames: BTreeSet::new(),
            timers: BTreeMap::new(),
        }
    }

    /// Current time on the host timeline.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    /// Number of outstanding frame requests.
    pub fn pending_frames(&self) -> usize {
        self.frames.len()
    }

    /// Number of outstanding timers.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Move the timeline forward and collect every callback that became due.
    ///
    /// Time never moves backwards; an earlier `now_ms` is ignored. Requests
    /// made while dispatching the returned wakeups fire on a later call.
    pub fn advance_to(&mut self, now_ms: u64) -> Vec<Wakeup> {
        self.now_ms = self.now_ms.max(now_ms);
        let now = self.now_ms;

        let mut due: Vec<(u64, u64)> = self
            .timers
            .iter()
            .filter(|&(_, &deadline)| deadline <= now)
            .map(|(&id, &deadline)| (deadline, id))
            .collect();
        due.sort_unstable();

        let mut wakeups = Vec::with_capacity(due.len() + self.frames.len());
        for (_, id) in due {
            self.timers.remove(&id);
            wakeups.push(Wakeup::Timer(TimerId(id)));
        }

        if now >= self.next_repaint_ms {
            self.next_repaint_ms = (now / self.frame_interval_ms + 1) * self.frame_interval_ms;
            wakeups.extend(
                std::mem::take(&mut self.frames)
                    .into_iter()
                    .map(|id| Wakeup::Frame(FrameRequest(id))),
            );
        }

        wakeups
    }

    /// Earliest time at which [`HostScheduler::advance_to`] has work to do.
    pub fn next_deadline(&self) -> Option<u64> {
        let timer = self.timers.values().copied().min();
        let frame = (!self.frames.is_empty()).then_some(self.next_repaint_ms);
        match (timer, frame) {
            (Some(t), Some(f)) => Some(t.min(f)),
            (t, f) => t.or(f),
        }
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Default for HostScheduler {
    fn default() -> Self {
        Self::new(Duration::from_millis(33))
    }
}

impl FrameScheduler for HostScheduler {
    fn request_frame(&mut self) -> FrameRequest {
        let id = self.allocate_id();
        self.frames.insert(id);
        FrameRequest(id)
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        self.frames.remove(&request.0);
    }
}

impl Timers for HostScheduler {
    fn set_timeout(&mut self, delay: Duration) -> TimerId {
        let id = self.allocate_id();
        let deadline = self.now_ms + delay.as_millis() as u64;
        self.timers.insert(id, deadline);
        TimerId(id)
    }

    fn clear_timeout(&mut self, id: TimerId) {
        self.timers.remove(&id.0);
    }
}
