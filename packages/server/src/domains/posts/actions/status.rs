use tracing::info;

use super::require_role;
use crate::common::{PostId, UserId};
use crate::domains::auth::UserRole;
use crate::domains::posts::data::UpdateStatusInput;
use crate::domains::posts::errors::PostError;
use crate::domains::posts::models::Post;
use crate::kernel::ServerDeps;

/// Supplier changes the status of their own post.
///
/// With `expected_status` the change is a compare-and-swap; a mismatch comes
/// back as `StatusConflict` carrying the status actually stored.
pub async fn update_post_status(
    post_id: PostId,
    supplier_id: UserId,
    role: UserRole,
    input: UpdateStatusInput,
    deps: &ServerDeps,
) -> Result<Post, PostError> {
    require_role(role, UserRole::Supplier)?;

    let updated = Post::update_status(
        post_id,
        supplier_id,
        input.status,
        input.expected_status,
        &deps.db_pool,
    )
    .await?;

    if let Some(post) = updated {
        info!(post_id = %post_id, status = %post.status, "Post status updated");
        return Ok(post);
    }

    // Nothing matched: tell a stale expectation apart from a missing post
    match Post::find_by_id(post_id, &deps.db_pool).await? {
        Some(post) if post.is_owned_by(supplier_id) => Err(PostError::StatusConflict {
            current: post.status,
        }),
        _ => Err(PostError::PostNotFound),
    }
}
