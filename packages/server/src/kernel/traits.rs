// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
//
// Naming convention: Base* for trait names (e.g., BaseClock)

use chrono::{DateTime, Utc};

// =============================================================================
// Clock Trait (Infrastructure - wall-clock time)
// =============================================================================

/// Source of the current instant.
///
/// Feed visibility depends on the time of day, so handlers read time through
/// this trait instead of calling `Utc::now()` directly.
pub trait BaseClock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Real wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl BaseClock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
