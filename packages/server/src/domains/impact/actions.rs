//! Dashboard and leaderboard actions

use sqlx::PgPool;
use tracing::debug;

use super::data::{ActivityItem, LeaderboardEntry, NgoMetrics, NgoStats, SupplierMetrics};
use super::models::{DonorTotal, NgoClaimActivity, SupplierTotal};
use super::summary::{
    claim_action_text, counts_as_active_claim, meals_from_kg, or_default, time_since,
    ACTIVITY_FEED_SIZE, LEADERBOARD_SIZE,
};
use crate::common::UserId;
use crate::domains::auth::UserRole;
use crate::domains::posts::actions::require_role;
use crate::domains::posts::models::ClaimStatus;
use crate::domains::posts::PostError;
use crate::kernel::ServerDeps;

/// Weight a supplier has given away and the meals it amounts to
pub async fn supplier_dashboard(
    supplier_id: UserId,
    role: UserRole,
    deps: &ServerDeps,
) -> Result<SupplierMetrics, PostError> {
    require_role(role, UserRole::Supplier)?;

    let total = SupplierTotal::for_supplier(supplier_id, &deps.db_pool).await?;

    Ok(SupplierMetrics {
        total_weight: total.total_weight,
        meals_donated: meals_from_kg(total.total_weight),
    })
}

/// Claim statistics and recent activity for an NGO
pub async fn ngo_dashboard(
    ngo_id: UserId,
    role: UserRole,
    deps: &ServerDeps,
) -> Result<NgoMetrics, PostError> {
    require_role(role, UserRole::Ngo)?;

    let rows = NgoClaimActivity::find_for_ngo(ngo_id, &deps.db_pool).await?;
    let now = deps.clock.now();

    let mut saved_kgs = 0.0;
    let mut active_claims = 0;
    for row in &rows {
        let claim_status = row.claim_status.parse::<ClaimStatus>().ok();
        if claim_status == Some(ClaimStatus::Approved) {
            saved_kgs += row.weight;
        }
        if counts_as_active_claim(claim_status, row.post_status.parse().ok()) {
            active_claims += 1;
        }
    }

    let feed = rows
        .into_iter()
        .take(ACTIVITY_FEED_SIZE)
        .map(|row| ActivityItem {
            id: row.post_id,
            supplier: or_default(row.supplier_name, "System"),
            action: claim_action_text(row.claim_status.parse().ok(), row.weight, &row.category),
            time: time_since(row.post_updated_at, now),
            status: row.claim_status,
        })
        .collect();

    debug!(ngo_id = %ngo_id, active_claims, saved_kgs, "NGO dashboard computed");

    Ok(NgoMetrics {
        stats: NgoStats {
            active_claims,
            meals_provided: meals_from_kg(saved_kgs),
            saved_kgs,
        },
        feed,
    })
}

/// Top suppliers by claimed weight (public)
pub async fn leaderboard(pool: &PgPool) -> Result<Vec<LeaderboardEntry>, PostError> {
    let donors = DonorTotal::top(LEADERBOARD_SIZE, pool).await?;

    Ok(donors
        .into_iter()
        .enumerate()
        .map(|(index, donor)| LeaderboardEntry {
            rank: index + 1,
            id: donor.supplier_id,
            name: or_default(donor.name, "Anonymous Hero"),
            city: or_default(donor.city, "Global"),
            total_donated: donor.total_donated,
        })
        .collect())
}
