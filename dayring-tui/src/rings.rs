//! Declarative ring state: how many discrete segments each gauge shows and
//! what fraction the continuous inner ring fills. The terminal drawing in
//! `ui::clock_view` is a thin adapter over these values.

use crate::schedule::BlockProgress;

/// Segments on each of the two discrete rings.
pub const SEGMENTS: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingFrame {
    /// Filled segments on the outer (work hour) ring, 0..=5.
    pub hour_segments: u8,
    /// Filled segments on the middle (part) ring, 0..=5.
    pub part_segments: u8,
    /// Fill fraction of the continuous inner ring, [0, 1].
    pub inner_fraction: f64,
}

impl Default for RingFrame {
    fn default() -> Self {
        Self {
            hour_segments: 0,
            part_segments: 0,
            inner_fraction: 0.0,
        }
    }
}

/// Ring state during an active block: segments fill up to and including the
/// current index, the inner ring tracks within-part progress.
pub fn frame_for_block(progress: &BlockProgress) -> RingFrame {
    RingFrame {
        hour_segments: progress.hour.min(SEGMENTS),
        part_segments: progress.part.min(SEGMENTS),
        inner_fraction: progress.part_progress,
    }
}

/// Ring state outside the blocks: discrete rings cleared, inner ring shows
/// overall completion of the current phase.
pub fn frame_for_rest(phase_completion: f64) -> RingFrame {
    RingFrame {
        hour_segments: 0,
        part_segments: 0,
        inner_fraction: phase_completion.clamp(0.0, 1.0),
    }
}

/// Edge-triggered detector for the part/hour chime.
///
/// Fires once per change of the (hour, part) pair and never on the first
/// observation after (re)initialization — there is no prior value to compare
/// against, and a cue on startup would be spurious.
#[derive(Debug, Default)]
pub struct CueTracker {
    last: Option<(u8, u8)>,
}

impl CueTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe the current pair; returns whether a cue should fire.
    pub fn observe(&mut self, hour: u8, part: u8) -> bool {
        let fire = matches!(self.last, Some(prev) if prev != (hour, part));
        self.last = Some((hour, part));
        fire
    }

    /// Forget the previous observation (called when leaving a block).
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::BlockProgress;
    use time::macros::datetime;
    use time::Duration;

    #[test]
    fn block_frame_fills_through_current_index() {
        let start = datetime!(2026-03-10 07:30 UTC);
        let p = BlockProgress::compute(1, start, start + Duration::minutes(30));
        let frame = frame_for_block(&p);
        assert_eq!(frame.hour_segments, 1);
        assert_eq!(frame.part_segments, 3);
        assert_eq!(frame.inner_fraction, 0.5);
    }

    #[test]
    fn rest_frame_clears_discrete_rings() {
        let frame = frame_for_rest(0.25);
        assert_eq!(frame.hour_segments, 0);
        assert_eq!(frame.part_segments, 0);
        assert_eq!(frame.inner_fraction, 0.25);
    }

    #[test]
    fn rest_fraction_is_clamped() {
        assert_eq!(frame_for_rest(1.7).inner_fraction, 1.0);
        assert_eq!(frame_for_rest(-0.3).inner_fraction, 0.0);
    }

    #[test]
    fn cue_never_fires_on_first_observation() {
        let mut cue = CueTracker::new();
        assert!(!cue.observe(1, 1));
    }

    #[test]
    fn cue_fires_once_per_change() {
        let mut cue = CueTracker::new();
        cue.observe(1, 1);
        assert!(!cue.observe(1, 1));
        assert!(cue.observe(1, 2));
        assert!(!cue.observe(1, 2));
        // Hour rollover changes both counters but fires a single cue.
        assert!(cue.observe(2, 1));
    }

    #[test]
    fn cue_stays_silent_after_reset() {
        let mut cue = CueTracker::new();
        cue.observe(1, 4);
        cue.reset();
        assert!(!cue.observe(2, 2));
        assert!(cue.observe(2, 3));
    }
}
