use time::{OffsetDateTime, UtcOffset};

/// Current wall-clock time in the host's local offset (UTC when the local
/// offset cannot be determined).
pub fn local_now() -> OffsetDateTime {
    let now = OffsetDateTime::now_utc();
    if let Ok(local_offset) = UtcOffset::current_local_offset() {
        now.to_offset(local_offset)
    } else {
        now
    }
}

/// "HH:MM" for display.
pub fn format_hhmm(t: OffsetDateTime) -> String {
    format!("{:02}:{:02}", t.hour(), t.minute())
}
