// TestDependencies - deterministic implementations for testing

use chrono::{DateTime, Utc};
use std::sync::Mutex;

use super::BaseClock;

// =============================================================================
// Fixed Clock
// =============================================================================

/// Clock frozen at a given instant; `set` moves it.
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap_or_else(|e| e.into_inner()) = now;
    }
}

impl BaseClock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_clock_moves_only_when_set() {
        let start = Utc.with_ymd_and_hms(2025, 3, 10, 4, 0, 0).unwrap();
        let clock = FixedClock::new(start);
        assert_eq!(clock.now(), start);
        assert_eq!(clock.now(), start);

        let later = Utc.with_ymd_and_hms(2025, 3, 10, 12, 30, 0).unwrap();
        clock.set(later);
        assert_eq!(clock.now(), later);
    }
}
