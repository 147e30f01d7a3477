//! Application setup and server configuration.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware,
    routing::{get, post, put},
    Router,
};
use sqlx::PgPool;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::RateLimitSettings;
use crate::kernel::ServerDeps;
use crate::server::middleware::jwt_auth_middleware;
use crate::server::routes::{
    claim_post_handler, feed_handler, health_handler, leaderboard_handler,
    manage_claim_handler, ngo_metrics_handler, post_detail_handler, supplier_metrics_handler,
    supplier_posts_handler, update_status_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub db_pool: PgPool,
    pub server_deps: Arc<ServerDeps>,
}

/// Router options that come from configuration rather than dependencies
#[derive(Debug, Clone, Default)]
pub struct AppOptions {
    /// Empty allows any origin
    pub allowed_origins: Vec<String>,
    /// `None` disables per-IP rate limiting
    pub rate_limit: Option<RateLimitSettings>,
}

/// Build the Axum application router
///
/// With rate limiting enabled the router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()` so the limiter can
/// key on the peer address.
pub fn build_app(deps: ServerDeps, options: AppOptions) -> Result<Router> {
    let jwt_service = deps.jwt_service.clone();

    let app_state = AxumAppState {
        db_pool: deps.db_pool.clone(),
        server_deps: Arc::new(deps),
    };

    let cors = cors_layer(&options.allowed_origins);

    let api = Router::new()
        .route("/api/posts", get(feed_handler))
        .route("/api/posts/leaderboard", get(leaderboard_handler))
        .route("/api/posts/supplier", get(supplier_posts_handler))
        .route("/api/posts/metrics", get(supplier_metrics_handler))
        .route("/api/posts/ngo/metrics", get(ngo_metrics_handler))
        .route("/api/posts/:id", get(post_detail_handler))
        .route("/api/posts/:id/claim", post(claim_post_handler))
        .route("/api/posts/:id/claim/manage", put(manage_claim_handler))
        .route("/api/posts/:id/status", put(update_status_handler))
        // JWT authentication (never rejects; handlers require a session)
        .layer(middleware::from_fn(move |req, next| {
            jwt_auth_middleware(jwt_service.clone(), req, next)
        }));

    let api = match options.rate_limit {
        Some(settings) => {
            let config = Arc::new(
                GovernorConfigBuilder::default()
                    .per_second(settings.per_second)
                    .burst_size(settings.burst_size)
                    .use_headers()
                    .finish()
                    .context("Invalid rate limiter configuration")?,
            );
            tracing::info!(
                per_second = settings.per_second,
                burst_size = settings.burst_size,
                "Rate limiting enabled"
            );
            api.layer(GovernorLayer { config })
        }
        None => api,
    };

    let app = api
        // Health check (no auth, no rate limit)
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
}
