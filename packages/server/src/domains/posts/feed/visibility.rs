//! Which active posts are on offer at this moment.

use chrono::{DateTime, Datelike, Utc, Weekday};
use chrono_tz::Tz;

use crate::domains::posts::models::{Post, PostType};

/// Wall-clock weekday and time as seen in the market timezone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CivilMoment {
    /// Full English weekday name, matching `ScheduledDay::day`
    pub weekday: &'static str,
    /// Zero-padded 24h "HH:MM"
    pub time: String,
}

impl CivilMoment {
    pub fn at(now: DateTime<Utc>, tz: Tz) -> Self {
        let local = now.with_timezone(&tz);
        Self {
            weekday: weekday_name(local.weekday()),
            time: local.format("%H:%M").to_string(),
        }
    }
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// One-time posts are always visible. Scheduled posts are visible only when
/// today's entry is active and the current time sits inside its window.
/// Unknown post types are hidden.
pub fn is_visible(post: &Post, moment: &CivilMoment) -> bool {
    match post.kind() {
        Some(PostType::OneTime) => true,
        Some(PostType::Scheduled) => post
            .scheduled_days
            .iter()
            .find(|d| d.day == moment.weekday && d.is_active)
            .is_some_and(|today| today.window_contains(&moment.time)),
        None => false,
    }
}
