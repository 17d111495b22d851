//! Frame scheduling for scroll animations.
//!
//! The animator never talks to a display loop directly. It hands
//! single-shot callbacks to a [`FrameScheduler`] supplied by the host,
//! which runs each one at the next repaint opportunity. Two schedulers
//! ship with the crate: [`ManualScheduler`] for host-pumped render
//! loops and deterministic tests, and [`TokioScheduler`] for hosts
//! running a tokio `LocalSet`.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use tracing::trace;

use super::timing::frame_interval;

/// A single animation step, run at the next frame opportunity.
pub type FrameCallback = Box<dyn FnOnce()>;

/// Opaque handle to a scheduled frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

/// Host-supplied "run this callback before the next repaint" primitive.
///
/// A scheduled callback runs at most once. `cancel` reliably prevents a
/// callback that has not yet run from running; cancelling a handle that
/// already ran (or was never issued) is a no-op. Callbacks are not
/// `Send`: scheduling is single-threaded and cooperative.
pub trait FrameScheduler {
    fn schedule(&self, callback: FrameCallback) -> FrameHandle;
    fn cancel(&self, handle: FrameHandle);
}

/// Deterministic scheduler driven by the caller.
///
/// Hosts that own a render loop call [`run_next`](Self::run_next) once
/// per repaint; tests use it as a manually-advanced frame clock.
#[derive(Default)]
pub struct ManualScheduler {
    queue: RefCell<VecDeque<(FrameHandle, FrameCallback)>>,
    next_id: Cell<u64>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of callbacks waiting for a frame.
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Run the oldest pending callback. Returns false when idle.
    pub fn run_next(&self) -> bool {
        let entry = self.queue.borrow_mut().pop_front();
        match entry {
            Some((handle, callback)) => {
                trace!(?handle, "running frame callback");
                callback();
                true
            }
            None => false,
        }
    }

    /// Run callbacks until the queue drains or `max_frames` have run,
    /// whichever comes first. The cap bounds callbacks that keep
    /// rescheduling themselves. Returns the number of frames run.
    pub fn run_until_idle(&self, max_frames: usize) -> usize {
        let mut ran = 0;
        while ran < max_frames && self.run_next() {
            ran += 1;
        }
        ran
    }
}

impl FrameScheduler for ManualScheduler {
    fn schedule(&self, callback: FrameCallback) -> FrameHandle {
        let handle = FrameHandle(self.next_id.get());
        self.next_id.set(handle.0 + 1);
        self.queue.borrow_mut().push_back((handle, callback));
        handle
    }

    fn cancel(&self, handle: FrameHandle) {
        self.queue.borrow_mut().retain(|(h, _)| *h != handle);
    }
}

/// Scheduler for tokio hosts: each callback runs on a local task after
/// one frame interval.
///
/// Callbacks are not `Send`, so `schedule` must be called from within a
/// [`tokio::task::LocalSet`].
pub struct TokioScheduler {
    frame_interval: Duration,
    tasks: RefCell<HashMap<FrameHandle, tokio::task::JoinHandle<()>>>,
    next_id: Cell<u64>,
}

impl TokioScheduler {
    pub fn new() -> Self {
        Self::with_frame_interval(frame_interval())
    }

    /// Override the frame interval, e.g. for reduced-motion hosts.
    pub fn with_frame_interval(frame_interval: Duration) -> Self {
        Self {
            frame_interval,
            tasks: RefCell::new(HashMap::new()),
            next_id: Cell::new(0),
        }
    }
}

impl Default for TokioScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScheduler for TokioScheduler {
    fn schedule(&self, callback: FrameCallback) -> FrameHandle {
        let handle = FrameHandle(self.next_id.get());
        self.next_id.set(handle.0 + 1);
        let delay = self.frame_interval;
        let task = tokio::task::spawn_local(async move {
            tokio::time::sleep(delay).await;
            callback();
        });
        let mut tasks = self.tasks.borrow_mut();
        tasks.retain(|_, task| !task.is_finished());
        tasks.insert(handle, task);
        handle
    }

    fn cancel(&self, handle: FrameHandle) {
        if let Some(task) = self.tasks.borrow_mut().remove(&handle) {
            task.abort();
        }
    }
}
