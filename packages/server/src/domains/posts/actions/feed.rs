use tracing::{debug, info};

use crate::common::{AuthError, UserId};
use crate::domains::auth::User;
use crate::domains::posts::errors::PostError;
use crate::domains::posts::feed::{build_feed, CivilMoment, Ranked, Viewer};
use crate::domains::posts::models::{Post, PostWithSupplier};
use crate::kernel::ServerDeps;

/// The ranked list of what the caller can collect right now
pub async fn load_feed(
    viewer_id: UserId,
    deps: &ServerDeps,
) -> Result<Vec<Ranked<PostWithSupplier>>, PostError> {
    // A valid token for a deleted account is treated as no session
    let user = User::find_by_id(viewer_id, &deps.db_pool)
        .await?
        .ok_or(AuthError::AuthenticationRequired)?;

    let viewer = Viewer::from_user(&user);
    let moment = CivilMoment::at(deps.clock.now(), deps.market_timezone);

    let active = Post::find_active_with_supplier(&deps.db_pool).await?;
    let candidates = active.len();

    debug!(
        weekday = moment.weekday,
        time = %moment.time,
        has_coordinates = viewer.coordinates.is_some(),
        "Building feed"
    );

    let feed = build_feed(active, &viewer, &moment);

    info!(
        viewer_id = %viewer_id,
        candidates,
        visible = feed.len(),
        "Feed served"
    );

    Ok(feed)
}
