use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use typed_builder::TypedBuilder;

use crate::common::UserId;

/// A marketplace account: an NGO that claims food or a supplier that posts it
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub role: String, // 'ngo', 'supplier'

    /// NGO name or supplier legal name
    pub display_name: String,
    pub phone: Option<String>,

    // Location
    pub address: Option<String>,
    pub city: String,
    pub district: String,
    pub state: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Which side of the marketplace an account is on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Ngo,
    Supplier,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Ngo => write!(f, "ngo"),
            UserRole::Supplier => write!(f, "supplier"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ngo" => Ok(UserRole::Ngo),
            "supplier" => Ok(UserRole::Supplier),
            _ => Err(anyhow::anyhow!("Invalid user role: {}", s)),
        }
    }
}

#[derive(Debug, Clone, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
pub struct CreateUser {
    pub email: String,
    pub role: UserRole,
    pub display_name: String,
    #[builder(default, setter(strip_option))]
    pub phone: Option<String>,
    #[builder(default, setter(strip_option))]
    pub address: Option<String>,
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
}

impl User {
    pub fn role(&self) -> Option<UserRole> {
        self.role.parse().ok()
    }

    pub async fn find_by_id(id: UserId, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn create(input: CreateUser, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO users (
                id, email, role, display_name, phone,
                address, city, district, state, lat, lng
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(UserId::new())
        .bind(input.email)
        .bind(input.role.to_string())
        .bind(input.display_name)
        .bind(input.phone)
        .bind(input.address)
        .bind(input.city)
        .bind(input.district)
        .bind(input.state)
        .bind(input.lat)
        .bind(input.lng)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_through_text_column() {
        for role in [UserRole::Ngo, UserRole::Supplier] {
            assert_eq!(role.to_string().parse::<UserRole>().unwrap(), role);
        }
        assert!("admin".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_role_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&UserRole::Ngo).unwrap(), "\"ngo\"");
    }
}
