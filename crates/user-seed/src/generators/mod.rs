//! Entity generators for seed data.
//!
//! - [`UserGenerator`]: random user records with a derived email

pub mod user;

pub use user::{GeneratedUser, UserGenConfig, UserGenerator};
