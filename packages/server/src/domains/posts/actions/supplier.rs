use tracing::debug;

use super::require_role;
use crate::common::UserId;
use crate::domains::auth::UserRole;
use crate::domains::posts::errors::PostError;
use crate::domains::posts::models::Post;
use crate::kernel::ServerDeps;

/// Everything the calling supplier has posted, newest first
pub async fn list_supplier_posts(
    supplier_id: UserId,
    role: UserRole,
    deps: &ServerDeps,
) -> Result<Vec<Post>, PostError> {
    require_role(role, UserRole::Supplier)?;

    let posts = Post::find_for_supplier(supplier_id, &deps.db_pool).await?;
    debug!(supplier_id = %supplier_id, count = posts.len(), "Supplier posts listed");

    Ok(posts)
}
