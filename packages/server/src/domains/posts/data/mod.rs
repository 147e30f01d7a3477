//! Request and response shapes for the posts endpoints

use serde::{Deserialize, Serialize};

use crate::common::ClaimId;
use crate::domains::posts::models::{Claim, ClaimStatus, PostStatus, PostWithSupplier};

/// Post with its claims, as seen by one caller
#[derive(Debug, Clone, Serialize)]
pub struct PostDetail {
    #[serde(flatten)]
    pub listing: PostWithSupplier,
    pub claims: Vec<Claim>,
    /// Whether the caller already has a claim on this post
    pub has_claimed: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ManageClaimInput {
    pub claim_id: ClaimId,
    pub status: ClaimStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusInput {
    pub status: PostStatus,
    /// Only apply the change if the post is still in this status
    #[serde(default)]
    pub expected_status: Option<PostStatus>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
