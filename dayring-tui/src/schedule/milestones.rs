use time::{Duration, OffsetDateTime, Time};

use super::phase::{Phase, PhaseSpan};
use super::{BLOCK, SETUP, SLEEP, WIND_DOWN};

/// The twelve phase-boundary timestamps of the 24-hour cycle containing a
/// given moment, all derived from the bedtime anchor.
///
/// Invariant: the six phase intervals tile `[wind_down_start, wind_down_end)`
/// with no gaps or overlaps, and `wind_down_end - wind_down_start == 24h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestones {
    pub wind_down_start: OffsetDateTime,
    pub sleep_start: OffsetDateTime,
    pub sleep_end: OffsetDateTime,
    pub setup_start: OffsetDateTime,
    pub setup_end: OffsetDateTime,
    pub block1_start: OffsetDateTime,
    pub block1_end: OffsetDateTime,
    pub block2_start: OffsetDateTime,
    pub block2_end: OffsetDateTime,
    pub block3_start: OffsetDateTime,
    pub block3_end: OffsetDateTime,
    pub wind_down_end: OffsetDateTime,
}

impl Milestones {
    /// Lay out the cycle anchored to the bedtime occurrence whose wind-down
    /// window contains `now`.
    ///
    /// The cutover happens at wind-down start (bedtime minus 30 minutes), not
    /// at bedtime itself: once wind-down for a night begins, that night's
    /// bedtime is the anchor. For a bedtime shortly after midnight the
    /// wind-down before tomorrow's occurrence already starts today, so the
    /// anchor can be yesterday's, today's or tomorrow's occurrence. This
    /// keeps the six intervals a true partition of the day, so resolution
    /// never falls between cycles.
    pub fn compute(bedtime: Time, now: OffsetDateTime) -> Self {
        let todays_bedtime = now.replace_time(bedtime);
        let anchor = if now >= todays_bedtime + Duration::days(1) - WIND_DOWN {
            todays_bedtime + Duration::days(1)
        } else if now >= todays_bedtime - WIND_DOWN {
            todays_bedtime
        } else {
            todays_bedtime - Duration::days(1)
        };

        let sleep_end = anchor + SLEEP;
        let setup_end = sleep_end + SETUP;
        let block1_end = setup_end + BLOCK;
        let block2_end = block1_end + BLOCK;
        let block3_end = block2_end + BLOCK;

        Self {
            wind_down_start: anchor - WIND_DOWN,
            sleep_start: anchor,
            sleep_end,
            setup_start: sleep_end,
            setup_end,
            block1_start: setup_end,
            block1_end,
            block2_start: block1_end,
            block2_end,
            block3_start: block2_end,
            block3_end,
            // The next cycle's wind-down begins exactly where block 3 ends,
            // closing the 24-hour window opened at wind_down_start.
            wind_down_end: block3_end,
        }
    }

    /// The half-open interval occupied by `phase` within this cycle.
    pub fn phase_span(&self, phase: Phase) -> PhaseSpan {
        let (start, end) = match phase {
            Phase::WindDown => (self.wind_down_start, self.sleep_start),
            Phase::Sleep => (self.sleep_start, self.sleep_end),
            Phase::Setup => (self.setup_start, self.setup_end),
            Phase::Block1 => (self.block1_start, self.block1_end),
            Phase::Block2 => (self.block2_start, self.block2_end),
            Phase::Block3 => (self.block3_start, self.block3_end),
        };
        PhaseSpan { start, end }
    }

    /// Whether `t` falls inside the 24-hour window these milestones tile.
    pub fn contains(&self, t: OffsetDateTime) -> bool {
        t >= self.wind_down_start && t < self.wind_down_end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{datetime, time};

    #[test]
    fn anchor_is_today_once_wind_down_begins() {
        let m = Milestones::compute(time!(23:00), datetime!(2026-03-10 22:45 UTC));
        assert_eq!(m.sleep_start, datetime!(2026-03-10 23:00 UTC));
        assert_eq!(m.wind_down_start, datetime!(2026-03-10 22:30 UTC));
    }

    #[test]
    fn anchor_is_tomorrow_when_wind_down_starts_before_midnight() {
        // Bedtime 00:15 puts wind-down at 23:45 the previous day; during
        // those minutes the cycle belongs to tomorrow's occurrence.
        let m = Milestones::compute(time!(00:15), datetime!(2026-03-10 23:50 UTC));
        assert_eq!(m.sleep_start, datetime!(2026-03-11 00:15 UTC));
        assert_eq!(m.wind_down_start, datetime!(2026-03-10 23:45 UTC));
        assert!(m.contains(datetime!(2026-03-10 23:50 UTC)));
    }

    #[test]
    fn anchor_is_yesterday_during_the_day() {
        let m = Milestones::compute(time!(23:00), datetime!(2026-03-10 08:00 UTC));
        assert_eq!(m.sleep_start, datetime!(2026-03-09 23:00 UTC));
        assert_eq!(m.sleep_end, datetime!(2026-03-10 07:00 UTC));
        assert_eq!(m.block1_start, datetime!(2026-03-10 07:30 UTC));
        assert_eq!(m.block3_end, datetime!(2026-03-10 22:30 UTC));
    }

    #[test]
    fn milestones_tile_a_full_day() {
        for bedtime in [time!(23:00), time!(00:15), time!(06:30), time!(21:45)] {
            let m = Milestones::compute(bedtime, datetime!(2026-03-10 12:00 UTC));
            assert_eq!(m.wind_down_end - m.wind_down_start, Duration::hours(24));

            // Each phase interval starts where the previous one ends.
            assert_eq!(m.wind_down_start + WIND_DOWN, m.sleep_start);
            assert_eq!(m.sleep_start + SLEEP, m.sleep_end);
            assert_eq!(m.sleep_end, m.setup_start);
            assert_eq!(m.setup_start + SETUP, m.setup_end);
            assert_eq!(m.setup_end, m.block1_start);
            assert_eq!(m.block1_start + BLOCK, m.block1_end);
            assert_eq!(m.block1_end, m.block2_start);
            assert_eq!(m.block2_end, m.block3_start);
            assert_eq!(m.block3_end, m.wind_down_end);
        }
    }

    #[test]
    fn every_instant_lands_in_exactly_one_phase() {
        // Bedtimes within 30 minutes after midnight exercise the
        // tomorrow-anchored branch.
        for bedtime in [time!(23:00), time!(00:15), time!(00:29), time!(12:00)] {
            let mut t = datetime!(2026-03-10 00:00 UTC);
            let end = datetime!(2026-03-11 00:00 UTC);
            while t < end {
                let m = Milestones::compute(bedtime, t);
                assert!(
                    m.contains(t),
                    "bedtime {bedtime}: {t} outside its own milestone window"
                );
                let matching = Phase::ALL
                    .iter()
                    .filter(|p| m.phase_span(**p).contains(t))
                    .count();
                assert_eq!(matching, 1, "bedtime {bedtime}: {t} matched {matching} phases");
                t += Duration::minutes(7);
            }
        }
    }
}
