use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::{PgConnection, PgPool};
use std::borrow::Borrow;
use typed_builder::TypedBuilder;

use super::ScheduledDay;
use crate::common::{PostId, UserId};
use crate::common::utils::Coordinates;

/// Post - one supplier's offer of surplus food
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
pub struct Post {
    #[builder(default = PostId::new())]
    pub id: PostId,
    pub supplier_id: UserId,

    #[builder(default = PostType::OneTime.to_string())]
    pub post_type: String, // 'one_time', 'scheduled'
    #[builder(default = PostStatus::Active.to_string())]
    pub status: String, // 'active', 'claimed', 'expired'

    // What is on offer
    #[builder(default = 1.0)]
    pub weight: f64, // kg
    #[builder(default = false)]
    pub packaging: bool,
    #[builder(default = "Cooked Meals".to_string())]
    pub category: String,
    #[builder(default = "6 hours".to_string())]
    pub shelf_life: String,
    #[builder(default, setter(strip_option))]
    pub image: Option<String>,

    // Location
    #[builder(default)]
    pub pickup_address: String,
    #[builder(default)]
    pub city: String,
    #[builder(default)]
    pub district: String,
    #[builder(default)]
    pub state: String,
    #[builder(default, setter(strip_option))]
    pub lat: Option<f64>,
    #[builder(default, setter(strip_option))]
    pub lng: Option<f64>,

    // Pickup logistics
    #[builder(default, setter(strip_option))]
    pub pickup_date: Option<String>,
    #[builder(default, setter(strip_option))]
    pub pickup_time: Option<String>,
    #[builder(default)]
    pub contact_name: String,
    #[builder(default)]
    pub contact_phone: String,
    #[builder(default, setter(strip_option))]
    pub special_instructions: Option<String>,

    /// Weekly release windows; ignored for one-time posts
    #[builder(default = Json(Vec::new()))]
    pub scheduled_days: Json<Vec<ScheduledDay>>,

    #[builder(default = Utc::now())]
    pub created_at: DateTime<Utc>,
    #[builder(default = Utc::now())]
    pub updated_at: DateTime<Utc>,
}

/// A post joined with the supplier's display name
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PostWithSupplier {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub post: Post,
    pub supplier_name: Option<String>,
}

impl Borrow<Post> for PostWithSupplier {
    fn borrow(&self) -> &Post {
        &self.post
    }
}

// =============================================================================
// Enums for type-safe columns
// =============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PostType {
    /// Single pickup, visible until claimed or expired
    OneTime,
    /// Recurring donation, visible only inside today's release window
    Scheduled,
}

impl std::fmt::Display for PostType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostType::OneTime => write!(f, "one_time"),
            PostType::Scheduled => write!(f, "scheduled"),
        }
    }
}

impl std::str::FromStr for PostType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "one_time" => Ok(PostType::OneTime),
            "scheduled" => Ok(PostType::Scheduled),
            _ => Err(anyhow::anyhow!("Invalid post type: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    Active,
    Claimed,
    Expired,
}

impl std::fmt::Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostStatus::Active => write!(f, "active"),
            PostStatus::Claimed => write!(f, "claimed"),
            PostStatus::Expired => write!(f, "expired"),
        }
    }
}

impl std::str::FromStr for PostStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "active" => Ok(PostStatus::Active),
            "claimed" => Ok(PostStatus::Claimed),
            "expired" => Ok(PostStatus::Expired),
            _ => Err(anyhow::anyhow!("Invalid post status: {}", s)),
        }
    }
}

// =============================================================================
// Creation parameters
// =============================================================================

#[derive(Debug, Clone, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
pub struct CreatePost {
    pub supplier_id: UserId,
    #[builder(default = PostType::OneTime)]
    pub post_type: PostType,
    pub weight: f64,
    #[builder(default = false)]
    pub packaging: bool,
    pub category: String,
    pub shelf_life: String,
    pub pickup_address: String,
    pub city: String,
    pub district: String,
    pub state: String,
    #[builder(default, setter(strip_option))]
    pub lat: Option<f64>,
    #[builder(default, setter(strip_option))]
    pub lng: Option<f64>,
    pub contact_name: String,
    pub contact_phone: String,
    #[builder(default)]
    pub scheduled_days: Vec<ScheduledDay>,
}

// =============================================================================
// Derived values
// =============================================================================

impl Post {
    /// Parsed `post_type`; `None` for values this build does not know
    pub fn kind(&self) -> Option<PostType> {
        self.post_type.parse().ok()
    }

    pub fn status(&self) -> Option<PostStatus> {
        self.status.parse().ok()
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        Coordinates::from_parts(self.lat, self.lng)
    }

    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.supplier_id == user_id
    }
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl Post {
    pub async fn find_by_id(id: PostId, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM posts WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Lock a post row for the rest of the transaction
    pub async fn find_for_update(id: PostId, conn: &mut PgConnection) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM posts WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(conn)
            .await
            .map_err(Into::into)
    }

    /// All active posts with supplier names, oldest first
    ///
    /// Scheduled-window filtering and ranking happen in `feed`, not SQL.
    pub async fn find_active_with_supplier(pool: &PgPool) -> Result<Vec<PostWithSupplier>> {
        sqlx::query_as::<_, PostWithSupplier>(
            r#"
            SELECT p.*, u.display_name AS supplier_name
            FROM posts p
            LEFT JOIN users u ON u.id = p.supplier_id
            WHERE p.status = 'active'
            ORDER BY p.created_at ASC, p.id ASC
            "#,
        )
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// A supplier's own posts in any status, newest first
    pub async fn find_for_supplier(supplier_id: UserId, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM posts
            WHERE supplier_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(supplier_id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn find_with_supplier(
        id: PostId,
        pool: &PgPool,
    ) -> Result<Option<PostWithSupplier>> {
        sqlx::query_as::<_, PostWithSupplier>(
            r#"
            SELECT p.*, u.display_name AS supplier_name
            FROM posts p
            LEFT JOIN users u ON u.id = p.supplier_id
            WHERE p.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    pub async fn create(input: CreatePost, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO posts (
                id, supplier_id, post_type, weight, packaging, category, shelf_life,
                pickup_address, city, district, state, lat, lng,
                contact_name, contact_phone, scheduled_days
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            RETURNING *
            "#,
        )
        .bind(PostId::new())
        .bind(input.supplier_id)
        .bind(input.post_type.to_string())
        .bind(input.weight)
        .bind(input.packaging)
        .bind(input.category)
        .bind(input.shelf_life)
        .bind(input.pickup_address)
        .bind(input.city)
        .bind(input.district)
        .bind(input.state)
        .bind(input.lat)
        .bind(input.lng)
        .bind(input.contact_name)
        .bind(input.contact_phone)
        .bind(Json(input.scheduled_days))
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Owner-scoped status change.
    ///
    /// With `expected` set this is a compare-and-swap: the row only changes if
    /// its current status still equals `expected`. Returns `None` when nothing
    /// matched (missing post, other owner, or stale expectation).
    pub async fn update_status(
        id: PostId,
        supplier_id: UserId,
        status: PostStatus,
        expected: Option<PostStatus>,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            UPDATE posts
            SET status = $3, updated_at = NOW()
            WHERE id = $1
              AND supplier_id = $2
              AND ($4::TEXT IS NULL OR status = $4)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(supplier_id)
        .bind(status.to_string())
        .bind(expected.map(|s| s.to_string()))
        .fetch_optional(pool)
        .await
        .map_err(Into::into)
    }

    /// Flip an active post to claimed. Returns false if it was not active.
    pub async fn mark_claimed_if_active(id: PostId, conn: &mut PgConnection) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE posts
            SET status = 'claimed', updated_at = NOW()
            WHERE id = $1 AND status = 'active'
            "#,
        )
        .bind(id)
        .execute(conn)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Bump `updated_at` so the post surfaces in recent-activity feeds
    pub async fn touch(id: PostId, conn: &mut PgConnection) -> Result<()> {
        sqlx::query("UPDATE posts SET updated_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(())
    }
}
