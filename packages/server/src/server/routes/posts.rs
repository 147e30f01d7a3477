//! `/api/posts` handlers: the NGO feed, supplier listing, post detail and the
//! claim workflow

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Extension, Path,
    },
    Json,
};

use crate::common::PostId;
use crate::domains::posts::actions;
use crate::domains::posts::data::{ManageClaimInput, MessageResponse, PostDetail, UpdateStatusInput};
use crate::domains::posts::feed::Ranked;
use crate::domains::posts::{Post, PostWithSupplier};
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;
use crate::server::middleware::{require_auth, AuthUser};

/// GET /api/posts
pub async fn feed_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
) -> Result<Json<Vec<Ranked<PostWithSupplier>>>, ApiError> {
    let user = require_auth(auth_user.map(|Extension(u)| u))?;
    let feed = actions::load_feed(user.user_id, &state.server_deps).await?;
    Ok(Json(feed))
}

/// GET /api/posts/supplier
pub async fn supplier_posts_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
) -> Result<Json<Vec<Post>>, ApiError> {
    let user = require_auth(auth_user.map(|Extension(u)| u))?;
    let posts = actions::list_supplier_posts(user.user_id, user.role, &state.server_deps).await?;
    Ok(Json(posts))
}

/// GET /api/posts/:id
pub async fn post_detail_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
    post_id: Result<Path<PostId>, PathRejection>,
) -> Result<Json<PostDetail>, ApiError> {
    let user = require_auth(auth_user.map(|Extension(u)| u))?;
    let Path(post_id) = post_id?;
    let detail = actions::get_post_detail(post_id, user.user_id, &state.db_pool).await?;
    Ok(Json(detail))
}

/// POST /api/posts/:id/claim
pub async fn claim_post_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
    post_id: Result<Path<PostId>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let user = require_auth(auth_user.map(|Extension(u)| u))?;
    let Path(post_id) = post_id?;
    actions::claim_post(post_id, user.user_id, user.role, &state.server_deps).await?;
    Ok(Json(MessageResponse::new("Success")))
}

/// PUT /api/posts/:id/claim/manage
pub async fn manage_claim_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
    post_id: Result<Path<PostId>, PathRejection>,
    input: Result<Json<ManageClaimInput>, JsonRejection>,
) -> Result<Json<PostDetail>, ApiError> {
    let user = require_auth(auth_user.map(|Extension(u)| u))?;
    let Path(post_id) = post_id?;
    let Json(input) = input?;
    let detail =
        actions::manage_claim(post_id, user.user_id, user.role, input, &state.server_deps).await?;
    Ok(Json(detail))
}

/// PUT /api/posts/:id/status
pub async fn update_status_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
    post_id: Result<Path<PostId>, PathRejection>,
    input: Result<Json<UpdateStatusInput>, JsonRejection>,
) -> Result<Json<Post>, ApiError> {
    let user = require_auth(auth_user.map(|Extension(u)| u))?;
    let Path(post_id) = post_id?;
    let Json(input) = input?;
    let post =
        actions::update_post_status(post_id, user.user_id, user.role, input, &state.server_deps)
            .await?;
    Ok(Json(post))
}
