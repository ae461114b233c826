//! Database integration for seeding.
//!
//! The [`Seeder`] owns one connection and inserts generated users
//! inside a single transaction.

mod seeder;

pub use seeder::{SeedError, SeedReport, Seeder};
