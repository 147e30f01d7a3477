use thiserror::Error;

use crate::common::AuthError;

/// Failures of post and claim operations that callers can act on
#[derive(Error, Debug)]
pub enum PostError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Claim not found")]
    ClaimNotFound,

    #[error("You have already requested to claim this food.")]
    AlreadyRequested,

    #[error("This food is no longer available")]
    NotClaimable,

    #[error("Post status changed concurrently (now {current})")]
    StatusConflict { current: String },

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<sqlx::Error> for PostError {
    fn from(e: sqlx::Error) -> Self {
        PostError::Internal(e.into())
    }
}
