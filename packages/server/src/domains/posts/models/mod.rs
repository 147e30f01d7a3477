pub mod claim;
pub mod post;
pub mod scheduled_day;

pub use claim::{Claim, ClaimStatus};
pub use post::{CreatePost, Post, PostStatus, PostType, PostWithSupplier};
pub use scheduled_day::ScheduledDay;
