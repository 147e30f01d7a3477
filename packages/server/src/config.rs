use anyhow::{Context, Result};
use chrono_tz::Tz;
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_issuer: String,
    pub allowed_origins: Vec<String>,
    /// Civil timezone used to evaluate scheduled posting windows
    pub market_timezone: Tz,
    /// `None` disables rate limiting
    pub rate_limit: Option<RateLimitSettings>,
}

/// Per-IP token bucket settings for tower_governor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitSettings {
    pub per_second: u64,
    pub burst_size: u32,
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            per_second: 10,
            burst_size: 20,
        }
    }
}

pub const DEFAULT_MARKET_TIMEZONE: &str = "Asia/Kolkata";

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let market_timezone = env::var("MARKET_TIMEZONE")
            .unwrap_or_else(|_| DEFAULT_MARKET_TIMEZONE.to_string());

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a valid number")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            jwt_issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| "surplus-share".to_string()),
            allowed_origins: parse_origins(&env::var("ALLOWED_ORIGINS").unwrap_or_default()),
            market_timezone: parse_timezone(&market_timezone)?,
            rate_limit: parse_rate_limit(
                env::var("RATE_LIMIT_PER_SECOND").ok().as_deref(),
                env::var("RATE_LIMIT_BURST").ok().as_deref(),
            )?,
        })
    }
}

/// Comma-separated origin list; blanks are dropped
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|e| anyhow::anyhow!("MARKET_TIMEZONE '{}' is not a valid IANA zone: {}", name, e))
}

fn parse_rate_limit(
    per_second: Option<&str>,
    burst: Option<&str>,
) -> Result<Option<RateLimitSettings>> {
    let defaults = RateLimitSettings::default();

    let per_second = match per_second {
        Some(raw) => raw
            .parse::<u64>()
            .context("RATE_LIMIT_PER_SECOND must be a valid number")?,
        None => defaults.per_second,
    };
    if per_second == 0 {
        return Ok(None);
    }

    let burst_size = match burst {
        Some(raw) => raw
            .parse::<u32>()
            .context("RATE_LIMIT_BURST must be a valid number")?,
        None => defaults.burst_size,
    };

    Ok(Some(RateLimitSettings {
        per_second,
        burst_size,
    }))
}
