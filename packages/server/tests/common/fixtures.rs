//! Test fixtures for creating test data.
//!
//! These fixtures use the model methods directly to create test data.

use anyhow::Result;
use sqlx::PgPool;
use surplus_core::domains::auth::{CreateUser, User, UserRole};
use surplus_core::domains::posts::models::CreatePost;
use surplus_core::domains::posts::{Post, PostType, ScheduledDay};
use surplus_core::common::{PostId, UserId};
use uuid::Uuid;

fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.org", prefix, Uuid::new_v4())
}

/// NGO in Andheri, Mumbai
pub async fn create_ngo(pool: &PgPool, name: &str) -> Result<User> {
    User::create(
        CreateUser::builder()
            .email(unique_email("ngo"))
            .role(UserRole::Ngo)
            .display_name(name)
            .phone("+919800000001")
            .city("Mumbai")
            .district("Mumbai Suburban")
            .state("Maharashtra")
            .lat(19.1136)
            .lng(72.8697)
            .build(),
        pool,
    )
    .await
}

/// NGO whose profile has no coordinates
pub async fn create_ngo_without_location(pool: &PgPool, name: &str, city: &str) -> Result<User> {
    User::create(
        CreateUser::builder()
            .email(unique_email("ngo"))
            .role(UserRole::Ngo)
            .display_name(name)
            .city(city)
            .state("Maharashtra")
            .build(),
        pool,
    )
    .await
}

pub async fn create_supplier(pool: &PgPool, legal_name: &str) -> Result<User> {
    User::create(
        CreateUser::builder()
            .email(unique_email("supplier"))
            .role(UserRole::Supplier)
            .display_name(legal_name)
            .city("Mumbai")
            .state("Maharashtra")
            .build(),
        pool,
    )
    .await
}

fn base_post(supplier_id: UserId, weight: f64, city: &str) -> CreatePost {
    CreatePost::builder()
        .supplier_id(supplier_id)
        .weight(weight)
        .category("Cooked Meals")
        .shelf_life("6 hours")
        .pickup_address("12 Market Road")
        .city(city)
        .district("")
        .state("Maharashtra")
        .contact_name("Kitchen Manager")
        .contact_phone("+919800000002")
        .build()
}

/// Active one-time post at the given coordinates
pub async fn create_post_at(
    pool: &PgPool,
    supplier_id: UserId,
    weight: f64,
    lat: f64,
    lng: f64,
) -> Result<Post> {
    let mut input = base_post(supplier_id, weight, "Mumbai");
    input.lat = Some(lat);
    input.lng = Some(lng);
    Post::create(input, pool).await
}

/// Active one-time post with no coordinates
pub async fn create_post_in_city(
    pool: &PgPool,
    supplier_id: UserId,
    weight: f64,
    city: &str,
) -> Result<Post> {
    Post::create(base_post(supplier_id, weight, city), pool).await
}

/// Active scheduled post with one window
pub async fn create_scheduled_post(
    pool: &PgPool,
    supplier_id: UserId,
    day: &str,
    post_time: &str,
    deadline_time: &str,
) -> Result<Post> {
    let mut input = base_post(supplier_id, 5.0, "Mumbai");
    input.post_type = PostType::Scheduled;
    input.scheduled_days = vec![ScheduledDay {
        day: day.to_string(),
        post_time: post_time.to_string(),
        deadline_time: deadline_time.to_string(),
        is_active: true,
    }];
    Post::create(input, pool).await
}

/// Overwrite a post's stored schedule with raw JSON, bypassing the typed
/// model, to reproduce rows written by older clients.
pub async fn store_raw_schedule(pool: &PgPool, post_id: PostId, schedule: &str) -> Result<()> {
    sqlx::query("UPDATE posts SET scheduled_days = $2::jsonb WHERE id = $1")
        .bind(post_id)
        .bind(schedule)
        .execute(pool)
        .await?;
    Ok(())
}
