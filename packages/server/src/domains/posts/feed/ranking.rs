//! Ordering of visible posts for one viewer.
//!
//! Two scoring systems share a single comparator: exact distance when both
//! posts have one, otherwise a coarse locality score with recency as the
//! tie-break. They are not on a common scale, so the comparison is made pair
//! by pair and the result is not guaranteed to be a total order. The sort
//! below is a plain stable merge sort that tolerates that.

use std::borrow::Borrow;
use std::cmp::Ordering;

use super::{Ranked, Viewer};
use crate::domains::posts::models::Post;

pub const STATE_MATCH: u32 = 1;
pub const DISTRICT_MATCH: u32 = 10;
pub const CITY_MATCH: u32 = 100;

/// 1 for same state, +10 for same district, +100 for same city
/// (case-insensitive). Each part is scored independently.
pub fn locality_score(post: &Post, viewer: &Viewer) -> u32 {
    let mut score = 0;
    if post.state == viewer.state {
        score += STATE_MATCH;
    }
    if post.district == viewer.district {
        score += DISTRICT_MATCH;
    }
    if post.city.to_lowercase() == viewer.city.to_lowercase() {
        score += CITY_MATCH;
    }
    score
}

/// Pairwise feed order.
///
/// Both distances known: nearer first. Otherwise: higher locality score
/// first, then newer `created_at` first.
pub fn compare<P: Borrow<Post>>(a: &Ranked<P>, b: &Ranked<P>, viewer: &Viewer) -> Ordering {
    if let (Some(da), Some(db)) = (a.distance, b.distance) {
        return da.partial_cmp(&db).unwrap_or(Ordering::Equal);
    }

    let (pa, pb) = (a.post.borrow(), b.post.borrow());
    let score_a = locality_score(pa, viewer);
    let score_b = locality_score(pb, viewer);

    score_b
        .cmp(&score_a)
        .then_with(|| pb.created_at.cmp(&pa.created_at))
}

/// Stable sort driven by an arbitrary pairwise comparator.
///
/// `slice::sort_by` may panic when the comparator is not a total order, so
/// this merges by hand. An element from the right run only overtakes the left
/// one when `cmp(left, right)` is `Greater`, which keeps equal elements in
/// input order.
pub fn stable_sort_by<T, F>(items: Vec<T>, mut cmp: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort(items, &mut cmp)
}

fn merge_sort<T>(mut items: Vec<T>, cmp: &mut dyn FnMut(&T, &T) -> Ordering) -> Vec<T> {
    if items.len() <= 1 {
        return items;
    }

    let right = items.split_off(items.len() / 2);
    let left = merge_sort(items, cmp);
    let right = merge_sort(right, cmp);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => cmp(l, r) == Ordering::Greater,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        merged.extend(if take_right { right.next() } else { left.next() });
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::utils::Coordinates;
    use crate::common::UserId;
    use chrono::{Duration, TimeZone, Utc};

    fn viewer() -> Viewer {
        Viewer {
            coordinates: None,
            state: "Maharashtra".to_string(),
            district: "Pune".to_string(),
            city: "Pune".to_string(),
        }
    }

    fn ranked(
        state: &str,
        district: &str,
        city: &str,
        age_hours: i64,
        distance: Option<f64>,
    ) -> Ranked<Post> {
        let base = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();
        let post = Post::builder()
            .supplier_id(UserId::new())
            .state(state)
            .district(district)
            .city(city)
            .created_at(base - Duration::hours(age_hours))
            .build();
        Ranked { post, distance }
    }

    #[test]
    fn test_locality_score_tiers() {
        let v = viewer();
        let score = |s: &str, d: &str, c: &str| locality_score(&ranked(s, d, c, 0, None).post, &v);

        assert_eq!(score("Gujarat", "Surat", "Surat"), 0);
        assert_eq!(score("Maharashtra", "Mumbai", "Mumbai"), 1);
        assert_eq!(score("Maharashtra", "Pune", "Hadapsar"), 11);
        assert_eq!(score("Maharashtra", "Pune", "Pune"), 111);
        assert_eq!(score("Maharashtra", "Pune", "PUNE"), 111);
        // Parts are independent of one another
        assert_eq!(score("Karnataka", "Pune", "pune"), 110);
    }

    #[test]
    fn test_state_and_district_are_case_sensitive() {
        let v = viewer();
        let post = ranked("maharashtra", "pune", "Other", 0, None).post;
        assert_eq!(locality_score(&post, &v), 0);
    }

    #[test]
    fn test_both_distances_nearer_first() {
        let v = viewer();
        let near = ranked("Gujarat", "Surat", "Surat", 0, Some(3.0));
        let far = ranked("Maharashtra", "Pune", "Pune", 0, Some(30.0));

        assert_eq!(compare(&near, &far, &v), Ordering::Less);
        assert_eq!(compare(&far, &near, &v), Ordering::Greater);
    }

    #[test]
    fn test_missing_distance_falls_back_to_locality() {
        let v = viewer();
        let measured_elsewhere = ranked("Gujarat", "Surat", "Surat", 0, Some(1.0));
        let same_city = ranked("Maharashtra", "Pune", "Pune", 0, None);

        // Distance is ignored because one side lacks it
        assert_eq!(compare(&same_city, &measured_elsewhere, &v), Ordering::Less);
        assert_eq!(compare(&measured_elsewhere, &same_city, &v), Ordering::Greater);
    }

    #[test]
    fn test_equal_locality_newer_first() {
        let v = viewer();
        let newer = ranked("Maharashtra", "Pune", "Pune", 1, None);
        let older = ranked("Maharashtra", "Pune", "Pune", 5, None);

        assert_eq!(compare(&newer, &older, &v), Ordering::Less);
        assert_eq!(compare(&older, &newer, &v), Ordering::Greater);
    }

    #[test]
    fn test_stable_sort_keeps_equal_elements_in_order() {
        let items = vec![(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd'), (1, 'e')];
        let sorted = stable_sort_by(items, |x, y| x.0.cmp(&y.0));
        assert_eq!(sorted, vec![(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c'), (1, 'e')]);
    }

    #[test]
    fn test_stable_sort_survives_inconsistent_comparator() {
        // Rock-paper-scissors: no total order exists
        let beats = |x: &u8, y: &u8| match (*x, *y) {
            (0, 2) | (1, 0) | (2, 1) => Ordering::Less,
            (a, b) if a == b => Ordering::Equal,
            _ => Ordering::Greater,
        };
        let items: Vec<u8> = (0..30).map(|i| i % 3).collect();
        let sorted = stable_sort_by(items, beats);

        let mut counts = [0; 3];
        sorted.iter().for_each(|x| counts[*x as usize] += 1);
        assert_eq!(counts, [10, 10, 10]);
    }

    #[test]
    fn test_equal_distances_keep_input_order() {
        let v = Viewer {
            coordinates: Some(Coordinates { lat: 0.0, lng: 0.0 }),
            ..viewer()
        };
        let first = ranked("A", "A", "A", 0, Some(5.0));
        let second = ranked("B", "B", "B", 0, Some(5.0));
        let (first_id, second_id) = (first.post.id, second.post.id);

        let sorted = stable_sort_by(vec![first, second], |a, b| compare(a, b, &v));
        assert_eq!(sorted[0].post.id, first_id);
        assert_eq!(sorted[1].post.id, second_id);
    }
}
