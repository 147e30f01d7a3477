//! Auth domain - identity of the caller
//!
//! Responsibilities:
//! - JWT verification (tokens carry the user id and marketplace role)
//! - User profiles, including the location context an NGO browses from
//!
//! Token issuance (signup, login, OAuth) lives outside this service; the
//! signing half of `JwtService` exists so tooling and tests can mint tokens.

pub mod jwt;
pub mod models;

pub use jwt::{Claims, JwtService};
pub use models::{CreateUser, User, UserRole};
