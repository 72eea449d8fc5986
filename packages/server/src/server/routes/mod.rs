// HTTP routes
pub mod health;
pub mod sessions;

pub use health::*;
pub use sessions::*;
