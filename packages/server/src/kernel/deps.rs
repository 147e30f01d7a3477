//! Server dependencies (using traits for testability)
//!
//! This module provides the central dependency container handed to every
//! route handler and domain action.

use chrono_tz::Tz;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domains::auth::JwtService;
use crate::kernel::{BaseClock, SystemClock};

/// Server dependencies accessible to handlers
#[derive(Clone)]
pub struct ServerDeps {
    pub db_pool: PgPool,
    /// JWT service for token verification
    pub jwt_service: Arc<JwtService>,
    pub clock: Arc<dyn BaseClock>,
    /// Civil timezone for scheduled posting windows
    pub market_timezone: Tz,
}

impl ServerDeps {
    pub fn new(db_pool: PgPool, jwt_service: Arc<JwtService>, market_timezone: Tz) -> Self {
        Self {
            db_pool,
            jwt_service,
            clock: Arc::new(SystemClock),
            market_timezone,
        }
    }

    /// Replace the clock (tests pin "now" to exercise posting windows)
    pub fn with_clock(mut self, clock: Arc<dyn BaseClock>) -> Self {
        self.clock = clock;
        self
    }
}
