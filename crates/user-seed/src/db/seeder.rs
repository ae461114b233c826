//! Database seeding utilities.

use std::time::Instant;

use sqlx::{Connection, PgConnection};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::ConnectionConfig;
use crate::generators::GeneratedUser;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Outcome of a committed seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    /// Rows inserted and committed.
    pub inserted: usize,
    /// Wall time from `BEGIN` to `COMMIT` (milliseconds).
    pub elapsed_ms: u64,
}

/// Inserts generated users over a single owned connection.
///
/// Dropping the seeder closes the connection, so every exit path releases it.
pub struct Seeder {
    conn: PgConnection,
}

impl Seeder {
    /// Opens a single connection to the configured database.
    pub async fn connect(config: &ConnectionConfig) -> Result<Self, SeedError> {
        let opts = config.connect_options()?;
        info!(
            "Connecting to {}:{}/{}",
            opts.get_host(),
            opts.get_port(),
            opts.get_database().unwrap_or(opts.get_username())
        );

        let conn = PgConnection::connect_with(&opts).await?;
        Ok(Self::new(conn))
    }

    /// Wraps an already open connection.
    pub fn new(conn: PgConnection) -> Self {
        Self { conn }
    }

    /// Seeds users into the `users` table.
    ///
    /// All rows are inserted in one transaction and committed once. If any
    /// insert fails the transaction is dropped, which rolls it back, and no
    /// rows are committed.
    pub async fn seed_users(&mut self, users: &[GeneratedUser]) -> Result<SeedReport, SeedError> {
        info!("Seeding {} users...", users.len());
        let start = Instant::now();

        let mut tx = self.conn.begin().await?;

        for (i, user) in users.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO users (first_name, last_name, email, age)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.email)
            .bind(user.age)
            .execute(&mut *tx)
            .await?;

            debug!(row = i + 1, email = %user.email, "Inserted user");
        }

        tx.commit().await?;

        let report = SeedReport {
            inserted: users.len(),
            elapsed_ms: start.elapsed().as_millis() as u64,
        };
        info!("Seeded {} users in {}ms", report.inserted, report.elapsed_ms);
        Ok(report)
    }

    /// Returns the current number of rows in `users`.
    pub async fn count_users(&mut self) -> Result<i64, SeedError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&mut self.conn)
            .await?;
        Ok(count)
    }

    /// Closes the connection gracefully.
    pub async fn close(self) -> Result<(), SeedError> {
        self.conn.close().await?;
        Ok(())
    }

    /// Returns the underlying connection.
    pub fn into_inner(self) -> PgConnection {
        self.conn
    }
}
