//! Claim workflow.
//!
//! Both operations run in a transaction holding the post row lock, so a claim
//! request and an approval on the same post serialize, and approval flips the
//! post with a conditional update that fails if it is no longer active.

use tracing::{info, warn};

use super::require_role;
use crate::common::{AuthError, PostId, UserId};
use crate::domains::auth::{User, UserRole};
use crate::domains::posts::actions::get_post_detail;
use crate::domains::posts::data::{ManageClaimInput, PostDetail};
use crate::domains::posts::errors::PostError;
use crate::domains::posts::models::{Claim, ClaimStatus, Post, PostStatus};
use crate::kernel::ServerDeps;

/// NGO asks to collect a post. One pending request per NGO per post.
pub async fn claim_post(
    post_id: PostId,
    ngo_id: UserId,
    role: UserRole,
    deps: &ServerDeps,
) -> Result<Claim, PostError> {
    require_role(role, UserRole::Ngo)?;

    let ngo = User::find_by_id(ngo_id, &deps.db_pool)
        .await?
        .ok_or(AuthError::AuthenticationRequired)?;

    let mut tx = deps.db_pool.begin().await?;

    let post = Post::find_for_update(post_id, &mut *tx)
        .await?
        .ok_or(PostError::PostNotFound)?;

    if post.status() != Some(PostStatus::Active) {
        return Err(PostError::NotClaimable);
    }

    let claim = Claim::create_if_absent(
        post_id,
        ngo_id,
        &ngo.display_name,
        ngo.phone.as_deref(),
        &mut *tx,
    )
    .await?
    .ok_or(PostError::AlreadyRequested)?;

    Post::touch(post_id, &mut *tx).await?;
    tx.commit().await?;

    info!(post_id = %post_id, ngo_id = %ngo_id, claim_id = %claim.id, "Claim requested");

    Ok(claim)
}

/// Supplier approves or rejects a claim on one of their posts.
///
/// Approving marks the post claimed; if it is no longer active (another claim
/// was approved first, or it expired) nothing is written and the caller gets
/// `StatusConflict`.
pub async fn manage_claim(
    post_id: PostId,
    supplier_id: UserId,
    role: UserRole,
    input: ManageClaimInput,
    deps: &ServerDeps,
) -> Result<PostDetail, PostError> {
    require_role(role, UserRole::Supplier)?;

    let mut tx = deps.db_pool.begin().await?;

    let post = Post::find_for_update(post_id, &mut *tx)
        .await?
        .ok_or(PostError::PostNotFound)?;

    if !post.is_owned_by(supplier_id) {
        return Err(AuthError::PermissionDenied("not your post".to_string()).into());
    }

    Claim::set_status(input.claim_id, post_id, input.status, &mut *tx)
        .await?
        .ok_or(PostError::ClaimNotFound)?;

    if input.status == ClaimStatus::Approved
        && !Post::mark_claimed_if_active(post_id, &mut *tx).await?
    {
        warn!(post_id = %post_id, claim_id = %input.claim_id, status = %post.status, "Approval rejected, post not active");
        return Err(PostError::StatusConflict {
            current: post.status,
        });
    }

    if input.status != ClaimStatus::Approved {
        Post::touch(post_id, &mut *tx).await?;
    }

    tx.commit().await?;

    info!(post_id = %post_id, claim_id = %input.claim_id, status = %input.status, "Claim updated");

    get_post_detail(post_id, supplier_id, &deps.db_pool).await
}
