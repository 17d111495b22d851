//! Frame timing for scroll animations.

use std::time::Duration;

/// Nominal frame cadence, ~60fps.
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Nominal frame interval as a [`Duration`].
#[inline]
pub fn frame_interval() -> Duration {
    Duration::from_millis(FRAME_INTERVAL_MS)
}

/// Number of frames an animation of `duration_secs` runs for.
///
/// A zero duration moves in a single frame. Positive durations shorter
/// than half a frame also round up to one frame so the per-frame step
/// stays finite.
#[inline]
pub fn total_frames(duration_secs: f64) -> u32 {
    if duration_secs == 0.0 {
        return 1;
    }
    let frames = (duration_secs * 1000.0 / FRAME_INTERVAL_MS as f64).round() as u32;
    frames.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_duration_is_one_frame() {
        assert_eq!(total_frames(0.0), 1);
    }

    #[test]
    fn durations_round_to_frame_counts() {
        assert_eq!(total_frames(0.016), 1);
        assert_eq!(total_frames(0.032), 2);
        assert_eq!(total_frames(0.3), 19);
        assert_eq!(total_frames(1.0), 63);
    }

    #[test]
    fn sub_frame_durations_still_get_one_frame() {
        assert_eq!(total_frames(0.001), 1);
        assert_eq!(total_frames(0.007), 1);
    }
}
