// Business domains
pub mod extraction;
pub mod session;
