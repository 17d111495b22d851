//! Smooth scrolling for scrollable UI components.
//!
//! The animator moves a target's scroll offset to a destination over a
//! fixed-cadence frame schedule, one write per frame. Hosts supply two
//! collaborators:
//!
//! * a [`FrameScheduler`] that runs a callback before the next repaint
//! * an offset accessor ([`HorizontalScroll`] or [`VerticalScroll`])
//!   implemented by the scrollable target
//!
//! # Usage
//!
//! ```ignore
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use glide_core::scroll::{scroll_top_to, ManualScheduler, ScrollOffsets};
//!
//! let scheduler = Rc::new(ManualScheduler::new());
//! let target = Rc::new(RefCell::new(ScrollOffsets::default()));
//!
//! // Animate to offset 240 over 0.3 seconds.
//! let handle = scroll_top_to(&scheduler, &target, 240.0, 0.3);
//!
//! // Pump one callback per repaint from the host's render loop,
//! // or hand the job to a TokioScheduler inside a LocalSet.
//! while scheduler.run_next() {}
//! assert_eq!(target.borrow().top, 240.0);
//!
//! // Stop an in-flight animation early:
//! handle.cancel();
//! ```

pub mod animation;
pub mod scheduler;
pub mod target;
pub mod timing;

pub use animation::{scroll_left_to, scroll_top_to, ScrollHandle, ScrollPhase};
pub use scheduler::{FrameCallback, FrameHandle, FrameScheduler, ManualScheduler, TokioScheduler};
pub use target::{HorizontalScroll, ScrollOffsets, VerticalScroll};
pub use timing::{frame_interval, total_frames, FRAME_INTERVAL_MS};
