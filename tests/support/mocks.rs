// tests/support/mocks.rs
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use tohyo_core::application::ports::time::Clock;

/// Fixed timestamp shared by every test.
static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks.rs")
        .with_timezone(&Utc)
});

/// Deterministic "now" for seeding and assertions.
pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

/// Clock that always answers with the instant it was built with.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
