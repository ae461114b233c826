//! Random user record generation.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::db::SeedError;

/// Generated user data ready for database insertion.
///
/// No id is generated; the database assigns the primary key on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: i32,
}

/// Configuration for user generation.
#[derive(Debug, Clone)]
pub struct UserGenConfig {
    /// Length of the lowercase first name.
    pub first_name_len: usize,
    /// Length of the lowercase last name.
    pub last_name_len: usize,
    /// Domain appended to `{first_name}.{last_name}@`.
    pub email_domain: String,
    /// Inclusive age range, sampled uniformly.
    pub age_range: RangeInclusive<i32>,
}

impl Default for UserGenConfig {
    fn default() -> Self {
        Self {
            first_name_len: 5,
            last_name_len: 7,
            email_domain: "example.com".to_string(),
            age_range: 18..=80,
        }
    }
}

impl UserGenConfig {
    /// Rejects configurations the generator cannot sample from.
    pub fn validate(&self) -> Result<(), SeedError> {
        if self.first_name_len == 0 || self.last_name_len == 0 {
            return Err(SeedError::InvalidConfig(
                "name lengths must be non-zero".to_string(),
            ));
        }
        if self.age_range.is_empty() {
            return Err(SeedError::InvalidConfig(format!(
                "empty age range {}..={}",
                self.age_range.start(),
                self.age_range.end()
            )));
        }
        if self.email_domain.is_empty() {
            return Err(SeedError::InvalidConfig("empty email domain".to_string()));
        }
        Ok(())
    }
}

/// Generates random user records.
#[derive(Debug, Clone)]
pub struct UserGenerator {
    config: UserGenConfig,
}

impl UserGenerator {
    /// Creates a new user generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: UserGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: UserGenConfig) -> Result<Self, SeedError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Generates a single user.
    pub fn generate(&self, rng: &mut impl Rng) -> GeneratedUser {
        let first_name = random_lowercase(self.config.first_name_len, rng);
        let last_name = random_lowercase(self.config.last_name_len, rng);
        let email = format!("{first_name}.{last_name}@{}", self.config.email_domain);
        let age = rng.gen_range(self.config.age_range.clone());

        GeneratedUser {
            first_name,
            last_name,
            email,
            age,
        }
    }

    /// Generates multiple users.
    pub fn generate_batch(&self, count: usize, rng: &mut impl Rng) -> Vec<GeneratedUser> {
        (0..count).map(|_| self.generate(rng)).collect()
    }
}

impl Default for UserGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns `len` characters drawn uniformly from `a..=z`.
fn random_lowercase(len: usize, rng: &mut impl Rng) -> String {
    (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
}
