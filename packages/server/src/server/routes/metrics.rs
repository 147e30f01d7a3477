use axum::{extract::Extension, Json};

use crate::domains::impact::{self, LeaderboardEntry, NgoMetrics, SupplierMetrics};
use crate::server::app::AxumAppState;
use crate::server::error::ApiError;
use crate::server::middleware::{require_auth, AuthUser};

/// GET /api/posts/metrics
pub async fn supplier_metrics_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
) -> Result<Json<SupplierMetrics>, ApiError> {
    let user = require_auth(auth_user.map(|Extension(u)| u))?;
    let metrics = impact::supplier_dashboard(user.user_id, user.role, &state.server_deps).await?;
    Ok(Json(metrics))
}

/// GET /api/posts/ngo/metrics
pub async fn ngo_metrics_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
) -> Result<Json<NgoMetrics>, ApiError> {
    let user = require_auth(auth_user.map(|Extension(u)| u))?;
    let metrics = impact::ngo_dashboard(user.user_id, user.role, &state.server_deps).await?;
    Ok(Json(metrics))
}

/// GET /api/posts/leaderboard (no session needed)
pub async fn leaderboard_handler(
    Extension(state): Extension<AxumAppState>,
) -> Result<Json<Vec<LeaderboardEntry>>, ApiError> {
    Ok(Json(impact::leaderboard(&state.db_pool).await?))
}
