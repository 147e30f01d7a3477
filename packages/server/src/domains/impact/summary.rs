//! Pure helpers behind the dashboard numbers and activity text.

use chrono::{DateTime, Utc};

use crate::domains::posts::models::{ClaimStatus, PostStatus};

pub const GRAMS_PER_MEAL: f64 = 400.0;
pub const LEADERBOARD_SIZE: i64 = 5;
pub const ACTIVITY_FEED_SIZE: usize = 10;

/// Whole meals a quantity of food in kg provides
pub fn meals_from_kg(kg: f64) -> i64 {
    ((kg * 1000.0) / GRAMS_PER_MEAL).floor() as i64
}

/// Relative age: "N days ago", "N hours ago", "N mins ago" or "Just now".
///
/// A unit is used only once strictly more than one of it has passed, so
/// exactly 24 hours still reads "24 hours ago".
pub fn time_since(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds() as f64;

    let days = seconds / 86_400.0;
    if days > 1.0 {
        return format!("{} days ago", days.floor());
    }
    let hours = seconds / 3_600.0;
    if hours > 1.0 {
        return format!("{} hours ago", hours.floor());
    }
    let minutes = seconds / 60.0;
    if minutes > 1.0 {
        return format!("{} mins ago", minutes.floor());
    }
    "Just now".to_string()
}

/// One-line description of an NGO's claim for the activity feed
pub fn claim_action_text(status: Option<ClaimStatus>, weight: f64, category: &str) -> String {
    match status {
        Some(ClaimStatus::Pending) => format!("Requested {}kg of {}", weight, category),
        Some(ClaimStatus::Approved) => format!("Claim approved for {}kg", weight),
        Some(ClaimStatus::Rejected) => format!("Request declined for {}", category),
        None => String::new(),
    }
}

/// Pending or approved claims on posts that have not expired
pub fn counts_as_active_claim(claim: Option<ClaimStatus>, post: Option<PostStatus>) -> bool {
    matches!(claim, Some(ClaimStatus::Pending | ClaimStatus::Approved))
        && post != Some(PostStatus::Expired)
}

/// Blank or missing names fall back to a placeholder
pub fn or_default(value: Option<String>, fallback: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}
