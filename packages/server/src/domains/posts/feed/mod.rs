//! NGO donation feed: scheduled-window visibility plus location ranking.
//!
//! Everything here is pure. Callers load the active posts and the viewer,
//! pick "now", and get back the ordered list.

pub mod ranking;
pub mod visibility;

use std::borrow::Borrow;

use serde::Serialize;

use crate::common::utils::Coordinates;
use crate::domains::auth::{User, UserRole};
use crate::domains::posts::models::Post;

pub use ranking::{compare, locality_score, stable_sort_by};
pub use visibility::{is_visible, weekday_name, CivilMoment};

/// Where the requesting NGO is browsing from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Viewer {
    pub coordinates: Option<Coordinates>,
    pub state: String,
    pub district: String,
    pub city: String,
}

impl Viewer {
    /// Location context of an NGO profile. Suppliers browse without one.
    pub fn from_user(user: &User) -> Self {
        if user.role() != Some(UserRole::Ngo) {
            return Self::default();
        }

        Self {
            coordinates: Coordinates::from_parts(user.lat, user.lng),
            state: user.state.clone(),
            district: user.district.clone(),
            city: user.city.clone(),
        }
    }
}

/// A post annotated with its distance from the viewer in km
/// (`null` when either side has no coordinates)
#[derive(Debug, Clone, Serialize)]
pub struct Ranked<P> {
    #[serde(flatten)]
    pub post: P,
    pub distance: Option<f64>,
}

/// Filter to what is on offer at `moment`, annotate distances, and order for
/// `viewer`.
pub fn build_feed<P: Borrow<Post>>(
    posts: Vec<P>,
    viewer: &Viewer,
    moment: &CivilMoment,
) -> Vec<Ranked<P>> {
    let annotated: Vec<Ranked<P>> = posts
        .into_iter()
        .filter(|p| is_visible(p.borrow(), moment))
        .map(|p| {
            let distance = match (viewer.coordinates, p.borrow().coordinates()) {
                (Some(from), Some(to)) => Some(from.distance_km(&to)),
                _ => None,
            };
            Ranked { post: p, distance }
        })
        .collect();

    stable_sort_by(annotated, |a, b| compare(a, b, viewer))
}
