use time::OffsetDateTime;

/// Source of "now" for anything that depends on the calendar.
pub trait Clock: Send + Sync {
    fn now(&self) -> OffsetDateTime;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// Clock frozen at a given instant, used by tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub OffsetDateTime);

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}

/// "YYYY-MM-DD" of the UTC calendar day containing `now`
pub fn utc_day_key(now: OffsetDateTime) -> String {
    let date = now.to_offset(time::UtcOffset::UTC).date();
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// "YYYY-MM-DD HH:MM:SS" in UTC, the provider's forecast timestamp layout
pub fn utc_timestamp(now: OffsetDateTime) -> String {
    let now = now.to_offset(time::UtcOffset::UTC);
    format!(
        "{} {:02}:{:02}:{:02}",
        utc_day_key(now),
        now.hour(),
        now.minute(),
        now.second()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock(datetime!(2026-10-16 09:30:00 UTC));
        assert_eq!(clock.now().year(), 2026);
    }

    #[test]
    fn test_day_key_uses_utc() {
        // 23:30 at UTC-5 is already the next day in UTC
        let now = datetime!(2026-10-16 23:30:00 -5);
        assert_eq!(utc_day_key(now), "2026-10-17");
        assert_eq!(utc_timestamp(now), "2026-10-17 04:30:00");
    }
}
