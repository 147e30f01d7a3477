use serde::Serialize;

use crate::common::{PostId, UserId};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SupplierMetrics {
    pub total_weight: f64,
    pub meals_donated: i64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NgoStats {
    pub active_claims: i64,
    pub meals_provided: i64,
    pub saved_kgs: f64,
}

/// One line of an NGO's recent activity
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ActivityItem {
    pub id: PostId,
    pub supplier: String,
    pub action: String,
    pub time: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NgoMetrics {
    pub stats: NgoStats,
    pub feed: Vec<ActivityItem>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub id: UserId,
    pub name: String,
    pub city: String,
    pub total_donated: f64,
}
