//! Post actions - entry-point functions called by the HTTP routes
//!
//! Actions take typed ids and the caller's role, enforce who may do what,
//! and return final models or a `PostError`.

pub mod claims;
pub mod detail;
pub mod feed;
pub mod status;
pub mod supplier;

pub use claims::{claim_post, manage_claim};
pub use detail::get_post_detail;
pub use feed::load_feed;
pub use status::update_post_status;
pub use supplier::list_supplier_posts;

use crate::common::AuthError;
use crate::domains::auth::UserRole;

pub(crate) fn require_role(actual: UserRole, required: UserRole) -> Result<(), AuthError> {
    if actual == required {
        return Ok(());
    }
    Err(AuthError::WrongRole(match required {
        UserRole::Ngo => "NGO",
        UserRole::Supplier => "supplier",
    }))
}
