use anyhow::Result;
use sqlx::PgPool;

use crate::common::UserId;

/// Claimed weight for one supplier
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SupplierTotal {
    pub total_weight: f64,
}

/// A supplier with the total weight of their claimed posts
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DonorTotal {
    pub supplier_id: UserId,
    pub name: Option<String>,
    pub city: Option<String>,
    pub total_donated: f64,
}

impl SupplierTotal {
    pub async fn for_supplier(supplier_id: UserId, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT COALESCE(SUM(weight), 0)::DOUBLE PRECISION AS total_weight
            FROM posts
            WHERE supplier_id = $1 AND status = 'claimed'
            "#,
        )
        .bind(supplier_id)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }
}

impl DonorTotal {
    /// Suppliers ranked by claimed weight, heaviest first
    pub async fn top(limit: i64, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT
                p.supplier_id,
                u.display_name AS name,
                u.city,
                SUM(p.weight)::DOUBLE PRECISION AS total_donated
            FROM posts p
            JOIN users u ON u.id = p.supplier_id
            WHERE p.status = 'claimed'
            GROUP BY p.supplier_id, u.display_name, u.city
            ORDER BY total_donated DESC, p.supplier_id ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }
}
