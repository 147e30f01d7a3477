// Business domains
pub mod auth;
pub mod impact;
pub mod posts;
