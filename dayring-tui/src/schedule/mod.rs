//! Schedule arithmetic: duration constants, milestone layout, phase
//! resolution and within-block progress. Everything in here is pure and
//! driven by wall-clock timestamps passed in by the caller.

mod milestones;
mod phase;
mod progress;

pub use milestones::Milestones;
pub use phase::{Phase, PhaseResolver, PhaseSpan};
pub use progress::BlockProgress;

use time::Duration;

/// 12-minute sub-unit of a work hour.
pub const PART: Duration = Duration::minutes(12);
/// Five parts.
pub const WORK_HOUR: Duration = Duration::minutes(60);
/// Five work hours.
pub const BLOCK: Duration = Duration::hours(5);
pub const WIND_DOWN: Duration = Duration::minutes(30);
pub const SLEEP: Duration = Duration::hours(8);
pub const SETUP: Duration = Duration::minutes(30);

pub const PARTS_PER_HOUR: u8 = 5;
pub const HOURS_PER_BLOCK: u8 = 5;
