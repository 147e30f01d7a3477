//! Posts domain - surplus-food listings and the claims NGOs make on them
//!
//! Responsibilities:
//! - Post and claim persistence (models/)
//! - The NGO feed: scheduled-window visibility and location ranking (feed/)
//! - Claim and status workflows with atomic updates (actions/)

pub mod actions;
pub mod data;
pub mod errors;
pub mod feed;
pub mod models;

pub use errors::PostError;
pub use models::{Claim, ClaimStatus, Post, PostStatus, PostType, PostWithSupplier, ScheduledDay};
