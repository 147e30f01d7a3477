//! Impact domain - donation totals for dashboards and the public leaderboard
//!
//! Weight is in kilograms; a meal is counted as 400 g of food.

pub mod actions;
pub mod data;
pub mod models;
pub mod summary;

pub use actions::{leaderboard, ngo_dashboard, supplier_dashboard};
pub use data::{ActivityItem, LeaderboardEntry, NgoMetrics, NgoStats, SupplierMetrics};
