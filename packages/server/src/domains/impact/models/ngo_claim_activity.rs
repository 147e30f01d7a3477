use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::common::{PostId, UserId};

/// A post an NGO has claimed, with that NGO's claim on it
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct NgoClaimActivity {
    pub post_id: PostId,
    pub supplier_name: Option<String>,
    pub weight: f64,
    pub category: String,
    pub post_status: String,
    pub claim_status: String,
    pub post_updated_at: DateTime<Utc>,
}

impl NgoClaimActivity {
    /// Every post the NGO has a claim on, most recently updated first
    pub async fn find_for_ngo(ngo_id: UserId, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT
                p.id AS post_id,
                u.display_name AS supplier_name,
                p.weight,
                p.category,
                p.status AS post_status,
                c.status AS claim_status,
                p.updated_at AS post_updated_at
            FROM claims c
            JOIN posts p ON p.id = c.post_id
            LEFT JOIN users u ON u.id = p.supplier_id
            WHERE c.ngo_id = $1
            ORDER BY p.updated_at DESC, p.id ASC
            "#,
        )
        .bind(ngo_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }
}
