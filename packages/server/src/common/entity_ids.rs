//! Typed ID definitions for the marketplace entities.

pub use super::id::Id;

/// Marker type for User entities (NGOs and suppliers).
pub struct User;

/// Marker type for Post entities (surplus-food listings).
pub struct Post;

/// Marker type for Claim entities (an NGO's request to collect a post).
pub struct Claim;

pub type UserId = Id<User>;
pub type PostId = Id<Post>;
pub type ClaimId = Id<Claim>;
