pub mod donation_totals;
pub mod ngo_claim_activity;

pub use donation_totals::{DonorTotal, SupplierTotal};
pub use ngo_claim_activity::NgoClaimActivity;
