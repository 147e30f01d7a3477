use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgConnection, PgPool};

use crate::common::{ClaimId, PostId, UserId};

/// An NGO's request to collect a post, approved or rejected by the supplier
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Claim {
    pub id: ClaimId,
    pub post_id: PostId,
    pub ngo_id: UserId,
    pub ngo_name: String,
    pub ngo_phone: Option<String>,
    pub status: String, // 'pending', 'approved', 'rejected'
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    Pending,
    Approved,
    Rejected,
}

impl std::fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClaimStatus::Pending => write!(f, "pending"),
            ClaimStatus::Approved => write!(f, "approved"),
            ClaimStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for ClaimStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pending" => Ok(ClaimStatus::Pending),
            "approved" => Ok(ClaimStatus::Approved),
            "rejected" => Ok(ClaimStatus::Rejected),
            _ => Err(anyhow::anyhow!("Invalid claim status: {}", s)),
        }
    }
}

impl Claim {
    pub fn status(&self) -> Option<ClaimStatus> {
        self.status.parse().ok()
    }

    pub async fn find_for_post(post_id: PostId, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM claims WHERE post_id = $1 ORDER BY created_at ASC, id ASC",
        )
        .bind(post_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Insert a pending claim unless this NGO already has one on the post.
    ///
    /// Relies on the `(post_id, ngo_id)` unique constraint, so two concurrent
    /// requests from the same NGO produce exactly one row. Returns `None` for
    /// the loser.
    pub async fn create_if_absent(
        post_id: PostId,
        ngo_id: UserId,
        ngo_name: &str,
        ngo_phone: Option<&str>,
        conn: &mut PgConnection,
    ) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO claims (id, post_id, ngo_id, ngo_name, ngo_phone)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (post_id, ngo_id) DO NOTHING
            RETURNING *
            "#,
        )
        .bind(ClaimId::new())
        .bind(post_id)
        .bind(ngo_id)
        .bind(ngo_name)
        .bind(ngo_phone)
        .fetch_optional(conn)
        .await
        .map_err(Into::into)
    }

    /// Set the status of a claim that belongs to `post_id`
    pub async fn set_status(
        id: ClaimId,
        post_id: PostId,
        status: ClaimStatus,
        conn: &mut PgConnection,
    ) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            UPDATE claims
            SET status = $3, updated_at = NOW()
            WHERE id = $1 AND post_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(post_id)
        .bind(status.to_string())
        .fetch_optional(conn)
        .await
        .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text_round_trip() {
        for status in [
            ClaimStatus::Pending,
            ClaimStatus::Approved,
            ClaimStatus::Rejected,
        ] {
            assert_eq!(status.to_string().parse::<ClaimStatus>().unwrap(), status);
        }
        assert!("Approved".parse::<ClaimStatus>().is_err());
    }
}
