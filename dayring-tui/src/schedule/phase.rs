use anyhow::{bail, Result};
use time::{OffsetDateTime, Time};

use super::Milestones;

/// Top-level schedule state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Sleep,
    Setup,
    Block1,
    Block2,
    Block3,
    WindDown,
}

impl Phase {
    /// Resolution priority order: first match wins.
    pub const ALL: [Phase; 6] = [
        Phase::Sleep,
        Phase::Setup,
        Phase::Block1,
        Phase::Block2,
        Phase::Block3,
        Phase::WindDown,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Phase::Sleep => "Sleep",
            Phase::Setup => "Set-up",
            Phase::Block1 => "Block 1",
            Phase::Block2 => "Block 2",
            Phase::Block3 => "Block 3",
            Phase::WindDown => "Wind-down",
        }
    }

    /// 1-based block index for the three work phases.
    pub fn block_index(&self) -> Option<u8> {
        match self {
            Phase::Block1 => Some(1),
            Phase::Block2 => Some(2),
            Phase::Block3 => Some(3),
            _ => None,
        }
    }

    pub fn is_block(&self) -> bool {
        self.block_index().is_some()
    }
}

/// A half-open `[start, end)` interval occupied by one phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseSpan {
    pub start: OffsetDateTime,
    pub end: OffsetDateTime,
}

impl PhaseSpan {
    pub fn contains(&self, t: OffsetDateTime) -> bool {
        t >= self.start && t < self.end
    }

    /// Fraction of the span elapsed at `now`, clamped to [0, 1].
    pub fn completion(&self, now: OffsetDateTime) -> f64 {
        let total = (self.end - self.start).whole_milliseconds();
        if total <= 0 {
            return 0.0;
        }
        let elapsed = (now - self.start).whole_milliseconds();
        (elapsed as f64 / total as f64).clamp(0.0, 1.0)
    }
}

/// Pure resolution against a fixed milestone set. `None` means `now` lies
/// outside the cycle these milestones describe.
pub fn resolve(milestones: &Milestones, now: OffsetDateTime) -> Option<Phase> {
    Phase::ALL
        .iter()
        .copied()
        .find(|phase| milestones.phase_span(*phase).contains(now))
}

/// Phase resolver with cached milestones.
///
/// On a miss the milestones are recomputed from the current bedtime and
/// resolution is retried exactly once. A second miss means the milestone
/// tiling invariant is broken and is reported as an error rather than
/// retried unboundedly.
#[derive(Debug)]
pub struct PhaseResolver {
    bedtime: Time,
    milestones: Milestones,
}

impl PhaseResolver {
    pub fn new(bedtime: Time, now: OffsetDateTime) -> Self {
        Self {
            bedtime,
            milestones: Milestones::compute(bedtime, now),
        }
    }

    pub fn bedtime(&self) -> Time {
        self.bedtime
    }

    pub fn milestones(&self) -> &Milestones {
        &self.milestones
    }

    /// Replace the bedtime anchor and recompute the cycle immediately.
    pub fn set_bedtime(&mut self, bedtime: Time, now: OffsetDateTime) {
        self.bedtime = bedtime;
        self.milestones = Milestones::compute(bedtime, now);
    }

    pub fn resolve(&mut self, now: OffsetDateTime) -> Result<Phase> {
        if let Some(phase) = resolve(&self.milestones, now) {
            return Ok(phase);
        }

        // Clock crossed into the next cycle since the last computation.
        self.milestones = Milestones::compute(self.bedtime, now);
        match resolve(&self.milestones, now) {
            Some(phase) => Ok(phase),
            None => bail!(
                "no phase interval contains {now}; milestone tiling invariant violated"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{datetime, time};

    #[test]
    fn shortly_after_bedtime_is_sleep() {
        let mut resolver = PhaseResolver::new(time!(23:00), datetime!(2026-03-10 23:05 UTC));
        let phase = resolver.resolve(datetime!(2026-03-10 23:05 UTC)).unwrap();
        assert_eq!(phase, Phase::Sleep);
        assert_eq!(
            resolver.milestones().sleep_start,
            datetime!(2026-03-10 23:00 UTC)
        );
        assert_eq!(
            resolver.milestones().sleep_end,
            datetime!(2026-03-11 07:00 UTC)
        );
    }

    #[test]
    fn morning_is_block1() {
        let mut resolver = PhaseResolver::new(time!(23:00), datetime!(2026-03-10 08:00 UTC));
        let phase = resolver.resolve(datetime!(2026-03-10 08:00 UTC)).unwrap();
        assert_eq!(phase, Phase::Block1);
    }

    #[test]
    fn stale_milestones_recompute_once() {
        // Milestones computed in the morning, resolution requested the next
        // morning: outside the cached cycle, satisfied after one recompute.
        let mut resolver = PhaseResolver::new(time!(23:00), datetime!(2026-03-10 08:00 UTC));
        let phase = resolver.resolve(datetime!(2026-03-11 09:00 UTC)).unwrap();
        assert_eq!(phase, Phase::Block1);
        assert_eq!(
            resolver.milestones().sleep_start,
            datetime!(2026-03-10 23:00 UTC)
        );
    }

    #[test]
    fn resolution_is_total_over_a_day() {
        for bedtime in [time!(23:00), time!(00:15), time!(06:30)] {
            let mut resolver = PhaseResolver::new(bedtime, datetime!(2026-03-10 00:00 UTC));
            let mut t = datetime!(2026-03-10 00:00 UTC);
            let end = datetime!(2026-03-11 00:00 UTC);
            while t < end {
                resolver.resolve(t).unwrap();
                t += time::Duration::minutes(1);
            }
        }
    }

    #[test]
    fn wind_down_crossing_midnight_resolves() {
        // Bedtime shortly after midnight: wind-down starts the previous
        // day, so the cached daytime cycle misses and one recompute must
        // land in the next one.
        let mut resolver = PhaseResolver::new(time!(00:15), datetime!(2026-03-10 12:00 UTC));
        let phase = resolver.resolve(datetime!(2026-03-10 23:50 UTC)).unwrap();
        assert_eq!(phase, Phase::WindDown);
    }

    #[test]
    fn wind_down_before_bed_resolves() {
        let mut resolver = PhaseResolver::new(time!(23:00), datetime!(2026-03-10 10:00 UTC));
        let phase = resolver.resolve(datetime!(2026-03-10 22:45 UTC)).unwrap();
        assert_eq!(phase, Phase::WindDown);
    }
}
