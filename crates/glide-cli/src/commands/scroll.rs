use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use clap::ValueEnum;
use tracing::info;

use glide_core::scroll::{
    frame_interval, scroll_left_to, scroll_top_to, HorizontalScroll, ScrollHandle,
    TokioScheduler, VerticalScroll,
};
use glide_core::AppConfig;

/// Axis selection for the demo animation.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Offset pair that logs every write, making each animation frame
/// visible in the command output.
#[derive(Default)]
struct LoggedOffsets {
    left: f64,
    top: f64,
}

impl HorizontalScroll for LoggedOffsets {
    fn scroll_left(&self) -> f64 {
        self.left
    }

    fn set_scroll_left(&mut self, offset: f64) {
        self.left = offset;
        info!(offset, "frame write (horizontal)");
    }
}

impl VerticalScroll for LoggedOffsets {
    fn scroll_top(&self) -> f64 {
        self.top
    }

    fn set_scroll_top(&mut self, offset: f64) {
        self.top = offset;
        info!(offset, "frame write (vertical)");
    }
}

pub async fn run(
    config: &AppConfig,
    from: f64,
    to: f64,
    duration: Option<f64>,
    axis: Axis,
) -> Result<()> {
    let duration = duration.unwrap_or(config.scroll.duration_secs);

    let local = tokio::task::LocalSet::new();
    local
        .run_until(async move {
            let scheduler = Rc::new(TokioScheduler::new());
            let target = Rc::new(RefCell::new(LoggedOffsets {
                left: from,
                top: from,
            }));

            let handle = match axis {
                Axis::Horizontal => scroll_left_to(&scheduler, &target, to, duration),
                Axis::Vertical => scroll_top_to(&scheduler, &target, to, duration),
            };

            wait_for(&handle).await;

            let target = target.borrow();
            let final_offset = match axis {
                Axis::Horizontal => target.left,
                Axis::Vertical => target.top,
            };
            println!("final offset: {final_offset} ({:?})", handle.phase());
            Ok(())
        })
        .await
}

async fn wait_for(handle: &ScrollHandle) {
    while handle.is_running() {
        tokio::time::sleep(frame_interval()).await;
    }
}
