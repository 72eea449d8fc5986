//! Kernel module - server infrastructure and dependencies.

pub mod deps;
pub mod test_dependencies;
pub mod traits;

pub use deps::{OverpassAdapter, ServerDeps};
pub use test_dependencies::MockOverpassService;
pub use traits::*;
