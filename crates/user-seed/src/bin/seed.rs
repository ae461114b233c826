//! Default seed script - inserts 100 random users
//!
//! Run with:
//! ```
//! cargo run -p user-seed --bin seed
//! ```
//!
//! `DATABASE_URL` overrides the built-in demo connection. `SEED_USER_COUNT`
//! and `SEED_RNG_SEED` adjust the run.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;
use user_seed::prelude::*;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let seed_config = SeedConfig::from_env()?;
    let mut seeder = Seeder::connect(&ConnectionConfig::from_env()).await?;

    tracing::info!("Connected to database");

    let mut rng = match seed_config.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let users = UserGenerator::new().generate_batch(seed_config.user_count, &mut rng);

    let before = seeder.count_users().await?;
    let report = seeder.seed_users(&users).await?;
    let after = seeder.count_users().await?;

    seeder.close().await?;

    tracing::info!("Seed completed!");
    tracing::info!("  Inserted: {}", report.inserted);
    tracing::info!("  Users table: {} -> {} rows", before, after);
    tracing::info!("  Elapsed: {}ms", report.elapsed_ms);

    Ok(())
}
