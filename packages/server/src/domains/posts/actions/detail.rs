use sqlx::PgPool;

use crate::common::{PostId, UserId};
use crate::domains::posts::data::PostDetail;
use crate::domains::posts::errors::PostError;
use crate::domains::posts::models::{Claim, Post};

/// A post with its claims and whether `viewer_id` has already asked for it
pub async fn get_post_detail(
    post_id: PostId,
    viewer_id: UserId,
    pool: &PgPool,
) -> Result<PostDetail, PostError> {
    let listing = Post::find_with_supplier(post_id, pool)
        .await?
        .ok_or(PostError::PostNotFound)?;

    let claims = Claim::find_for_post(post_id, pool).await?;
    let has_claimed = claims.iter().any(|c| c.ngo_id == viewer_id);

    Ok(PostDetail {
        listing,
        claims,
        has_claimed,
    })
}
