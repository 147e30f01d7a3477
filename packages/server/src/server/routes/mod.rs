// HTTP routes
pub mod health;
pub mod metrics;
pub mod posts;

pub use health::*;
pub use metrics::*;
pub use posts::*;
