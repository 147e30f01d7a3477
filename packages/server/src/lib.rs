// Surplus Share - API Core
//
// Backend for the food-donation marketplace: suppliers publish surplus food,
// NGOs browse a location-ranked feed and claim what they can collect.
//
// Domains own their models (all SQL lives in domains/*/models) and pure logic;
// the server module is a thin axum layer on top.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
