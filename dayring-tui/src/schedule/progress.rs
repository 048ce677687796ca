use time::OffsetDateTime;

use super::{HOURS_PER_BLOCK, PART, PARTS_PER_HOUR, WORK_HOUR};

/// Position within the active work block: two nested modulo-5 counters over
/// part and work-hour durations, plus the continuous fraction of the current
/// part. All counts use floor division over milliseconds; the fraction is
/// never rounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockProgress {
    /// 1-based block index, 1..=3.
    pub block: u8,
    /// 1-based work hour within the block, 1..=5.
    pub hour: u8,
    /// 1-based part within the hour, 1..=5.
    pub part: u8,
    /// Fraction of the current part elapsed, [0, 1).
    pub part_progress: f64,
    /// Whole parts completed within the current hour, 0..=4.
    pub completed_parts: u8,
    /// Whole work hours completed within the block, 0..=4.
    pub completed_hours: u8,
}

impl BlockProgress {
    pub fn compute(block: u8, block_start: OffsetDateTime, now: OffsetDateTime) -> Self {
        let elapsed_ms = (now - block_start).whole_milliseconds().max(0) as u64;
        let part_ms = PART.whole_milliseconds() as u64;
        let hour_ms = WORK_HOUR.whole_milliseconds() as u64;

        let parts_elapsed = elapsed_ms / part_ms;
        let hours_elapsed = elapsed_ms / hour_ms;
        let completed_parts = (parts_elapsed % PARTS_PER_HOUR as u64) as u8;
        let completed_hours = (hours_elapsed % HOURS_PER_BLOCK as u64) as u8;

        Self {
            block,
            hour: completed_hours + 1,
            part: completed_parts + 1,
            part_progress: (elapsed_ms % part_ms) as f64 / part_ms as f64,
            completed_parts,
            completed_hours,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;
    use time::Duration;

    const START: OffsetDateTime = datetime!(2026-03-10 07:30 UTC);

    #[test]
    fn block_start_is_first_part_of_first_hour() {
        let p = BlockProgress::compute(1, START, START);
        assert_eq!((p.block, p.hour, p.part), (1, 1, 1));
        assert_eq!(p.part_progress, 0.0);
        assert_eq!(p.completed_parts, 0);
        assert_eq!(p.completed_hours, 0);
    }

    #[test]
    fn last_millisecond_stays_in_first_part() {
        let p = BlockProgress::compute(1, START, START + PART - Duration::milliseconds(1));
        assert_eq!(p.part, 1);
        assert!(p.part_progress < 1.0);
        assert!(p.part_progress > 0.99);
    }

    #[test]
    fn part_boundary_advances_and_resets_progress() {
        let p = BlockProgress::compute(1, START, START + PART);
        assert_eq!(p.part, 2);
        assert_eq!(p.part_progress, 0.0);
        assert_eq!(p.completed_parts, 1);
    }

    #[test]
    fn five_parts_roll_the_hour() {
        let p = BlockProgress::compute(1, START, START + Duration::minutes(60));
        assert_eq!(p.hour, 2);
        assert_eq!(p.part, 1);
        assert_eq!(p.completed_hours, 1);
        assert_eq!(p.completed_parts, 0);
    }

    #[test]
    fn block_boundary_reproduces_first_part_of_next_block() {
        let block2_start = START + Duration::hours(5);
        let p = BlockProgress::compute(2, block2_start, block2_start);
        assert_eq!((p.block, p.hour, p.part), (2, 1, 1));
        assert_eq!(p.part_progress, 0.0);
    }

    #[test]
    fn thirty_minutes_in_is_part_three_halfway() {
        // Bedtime 23:00 puts block 1 at 07:30; at 08:00 two full parts have
        // passed plus six minutes of the third.
        let p = BlockProgress::compute(1, START, datetime!(2026-03-10 08:00 UTC));
        assert_eq!((p.block, p.hour, p.part), (1, 1, 3));
        assert_eq!(p.part_progress, 0.5);
        assert_eq!(p.completed_parts, 2);
    }
}
