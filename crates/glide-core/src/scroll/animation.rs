//! Frame-driven scroll animation.
//!
//! [`scroll_left_to`] and [`scroll_top_to`] move a target's offset from
//! its current value to a destination over a duration, writing once per
//! scheduled frame, and hand back a [`ScrollHandle`] for cancellation.
//!
//! Each session schedules at most one frame callback at a time; the
//! callback performs one step and either reschedules or ends the chain.
//! The first frame is scheduled like every other, never run inside the
//! entry call, so a session cancelled before the scheduler fires
//! performs zero writes.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, trace};

use super::scheduler::{FrameHandle, FrameScheduler};
use super::target::{HorizontalScroll, VerticalScroll};
use super::timing::total_frames;

/// Lifecycle of one animation session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollPhase {
    /// Frames are still being scheduled.
    Running,
    /// The frame budget ran out (horizontal) or the destination was
    /// reached (vertical).
    Completed,
    /// [`ScrollHandle::cancel`] stopped the session.
    Cancelled,
}

struct SessionState {
    phase: ScrollPhase,
    pending: Option<FrameHandle>,
}

impl SessionState {
    fn new() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            phase: ScrollPhase::Running,
            pending: None,
        }))
    }
}

/// Handle to an in-flight scroll animation.
///
/// Dropping the handle does not stop the animation; only
/// [`cancel`](Self::cancel) does.
pub struct ScrollHandle {
    scheduler: Rc<dyn FrameScheduler>,
    state: Rc<RefCell<SessionState>>,
}

impl ScrollHandle {
    /// Stop the animation. No further frames are scheduled; a frame
    /// callback already handed to the scheduler for this tick still
    /// applies its write. Idempotent, and a no-op after natural
    /// completion.
    pub fn cancel(&self) {
        let mut state = self.state.borrow_mut();
        if state.phase != ScrollPhase::Running {
            return;
        }
        state.phase = ScrollPhase::Cancelled;
        if let Some(handle) = state.pending.take() {
            self.scheduler.cancel(handle);
        }
        debug!("scroll animation cancelled");
    }

    pub fn phase(&self) -> ScrollPhase {
        self.state.borrow().phase
    }

    pub fn is_running(&self) -> bool {
        self.phase() == ScrollPhase::Running
    }
}

/// Animate a target's horizontal offset to `to` over `duration_secs`.
///
/// The offset advances by a fixed increment each frame and the session
/// completes once the frame budget is exhausted. The accumulated sum
/// converges on `to` but the final write is not snapped to it; with
/// fractional increments the last write can sit one rounding error
/// short of the destination.
///
/// `to` is not validated against the target's scrollable range;
/// out-of-range values are written as-is and any clamping is the
/// target's job.
pub fn scroll_left_to<S, T>(
    scheduler: &Rc<S>,
    target: &Rc<RefCell<T>>,
    to: f64,
    duration_secs: f64,
) -> ScrollHandle
where
    S: FrameScheduler + 'static,
    T: HorizontalScroll + 'static,
{
    let from = target.borrow().scroll_left();
    let frames = total_frames(duration_secs);
    let state = SessionState::new();
    debug!(from, to, frames, "starting horizontal scroll");
    schedule_left_frame(
        scheduler,
        target,
        &state,
        LeftStep {
            delta: (to - from) / f64::from(frames),
            current: from,
            frames,
            count: 0,
        },
    );
    ScrollHandle {
        scheduler: Rc::clone(scheduler) as Rc<dyn FrameScheduler>,
        state,
    }
}

struct LeftStep {
    delta: f64,
    current: f64,
    frames: u32,
    count: u32,
}

fn schedule_left_frame<S, T>(
    scheduler: &Rc<S>,
    target: &Rc<RefCell<T>>,
    state: &Rc<RefCell<SessionState>>,
    mut step: LeftStep,
) where
    S: FrameScheduler + 'static,
    T: HorizontalScroll + 'static,
{
    let chained = Rc::clone(scheduler);
    let tgt = Rc::clone(target);
    let session = Rc::clone(state);
    let handle = scheduler.schedule(Box::new(move || {
        {
            let mut session = session.borrow_mut();
            if session.phase != ScrollPhase::Running {
                return;
            }
            session.pending = None;
        }
        step.current += step.delta;
        tgt.borrow_mut().set_scroll_left(step.current);
        trace!(offset = step.current, "horizontal scroll frame");
        step.count += 1;
        {
            let mut session = session.borrow_mut();
            if session.phase != ScrollPhase::Running {
                return;
            }
            if step.count >= step.frames {
                session.phase = ScrollPhase::Completed;
                debug!(offset = step.current, "horizontal scroll complete");
                return;
            }
        }
        schedule_left_frame(&chained, &tgt, &session, step);
    }));
    state.borrow_mut().pending = Some(handle);
}

/// Animate a target's vertical offset to `to` over `duration_secs`.
///
/// The offset moves by a fixed step each frame and is clamped to `to`
/// once a step crosses it in the direction of travel, so the
/// destination is always written exactly. The session completes on the
/// first frame the offset lands on `to`; a session whose target equals
/// its start completes after a single write.
pub fn scroll_top_to<S, T>(
    scheduler: &Rc<S>,
    target: &Rc<RefCell<T>>,
    to: f64,
    duration_secs: f64,
) -> ScrollHandle
where
    S: FrameScheduler + 'static,
    T: VerticalScroll + 'static,
{
    let current = target.borrow().scroll_top();
    let frames = total_frames(duration_secs);
    let state = SessionState::new();
    debug!(from = current, to, frames, "starting vertical scroll");
    schedule_top_frame(
        scheduler,
        target,
        &state,
        TopStep {
            step: (to - current) / f64::from(frames),
            current,
            to,
            is_down: current < to,
        },
    );
    ScrollHandle {
        scheduler: Rc::clone(scheduler) as Rc<dyn FrameScheduler>,
        state,
    }
}

struct TopStep {
    step: f64,
    current: f64,
    to: f64,
    is_down: bool,
}

fn schedule_top_frame<S, T>(
    scheduler: &Rc<S>,
    target: &Rc<RefCell<T>>,
    state: &Rc<RefCell<SessionState>>,
    mut step: TopStep,
) where
    S: FrameScheduler + 'static,
    T: VerticalScroll + 'static,
{
    let chained = Rc::clone(scheduler);
    let tgt = Rc::clone(target);
    let session = Rc::clone(state);
    let handle = scheduler.schedule(Box::new(move || {
        {
            let mut session = session.borrow_mut();
            if session.phase != ScrollPhase::Running {
                return;
            }
            session.pending = None;
        }
        step.current += step.step;
        let crossed = (step.is_down && step.current > step.to)
            || (!step.is_down && step.current < step.to);
        if crossed {
            step.current = step.to;
        }
        tgt.borrow_mut().set_scroll_top(step.current);
        trace!(offset = step.current, "vertical scroll frame");
        {
            let mut session = session.borrow_mut();
            if session.phase != ScrollPhase::Running {
                return;
            }
            // exact: the clamp assigns `to` itself
            if step.current == step.to {
                session.phase = ScrollPhase::Completed;
                debug!(offset = step.current, "vertical scroll complete");
                return;
            }
        }
        schedule_top_frame(&chained, &tgt, &session, step);
    }));
    state.borrow_mut().pending = Some(handle);
}
