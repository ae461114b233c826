//! Seed data for a `users` table.
//!
//! Generates random user records (lowercase first and last name, a derived
//! `first.last@example.com` email, and an age in 18..=80) and inserts them
//! over a single connection in one transaction.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use user_seed::prelude::*;
//!
//! let mut seeder = Seeder::connect(&ConnectionConfig::from_env()).await?;
//! let users = UserGenerator::new().generate_batch(100, &mut rand::thread_rng());
//! seeder.seed_users(&users).await?;
//! seeder.close().await?;
//! ```

pub mod config;
pub mod db;
pub mod generators;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{ConnectionConfig, SeedConfig};
    pub use crate::db::{SeedError, SeedReport, Seeder};
    pub use crate::generators::{GeneratedUser, UserGenConfig, UserGenerator};
}
