use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// One weekday of a recurring donation: the post is released at `post_time`
/// and must be collected by `deadline_time` ("HH:MM", 24h, market timezone).
///
/// Decoding never fails on a bad entry: missing, null or mistyped fields
/// (or an entry that is not an object at all) become `""` / `false`, which
/// the visibility check treats as hidden.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ScheduledDay {
    /// Full English weekday name, e.g. "Monday"
    pub day: String,
    pub post_time: String,
    pub deadline_time: String,
    pub is_active: bool,
}

#[derive(Deserialize)]
struct StoredScheduledDay {
    #[serde(default, deserialize_with = "text_or_empty")]
    day: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    post_time: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    deadline_time: String,
    #[serde(default, deserialize_with = "flag_or_false")]
    is_active: bool,
}

impl<'de> Deserialize<'de> for ScheduledDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Lenient::<StoredScheduledDay>::deserialize(deserializer)? {
            Lenient::Value(stored) => ScheduledDay {
                day: stored.day,
                post_time: stored.post_time,
                deadline_time: stored.deadline_time,
                is_active: stored.is_active,
            },
            Lenient::Other(_) => ScheduledDay::default(),
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Value(T),
    Other(IgnoredAny),
}

fn text_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Lenient::<String>::deserialize(deserializer)? {
        Lenient::Value(text) => text,
        Lenient::Other(_) => String::new(),
    })
}

fn flag_or_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(matches!(
        Lenient::<bool>::deserialize(deserializer)?,
        Lenient::Value(true)
    ))
}

impl ScheduledDay {
    /// Whether `time` ("HH:MM") falls inside `[post_time, deadline_time]`.
    ///
    /// Comparison is on the zero-padded strings, so a window that wraps past
    /// midnight (22:00 → 02:00) never matches. Entries with malformed times
    /// never match either.
    pub fn window_contains(&self, time: &str) -> bool {
        if !is_clock_time(&self.post_time) || !is_clock_time(&self.deadline_time) {
            return false;
        }

        time >= self.post_time.as_str() && time <= self.deadline_time.as_str()
    }
}

/// Strict "HH:MM" check: two digits, colon, two digits, hours 00-23,
/// minutes 00-59. Only strings of this shape sort chronologically.
pub fn is_clock_time(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return false;
    }

    let digits = [bytes[0], bytes[1], bytes[3], bytes[4]];
    if !digits.iter().all(u8::is_ascii_digit) {
        return false;
    }

    let hours = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
    let minutes = (bytes[3] - b'0') * 10 + (bytes[4] - b'0');
    hours < 24 && minutes < 60
}
