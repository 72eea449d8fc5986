// Common test utilities

pub mod fixtures;
pub mod harness;

// Not every test binary uses both halves.
#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use harness::*;
