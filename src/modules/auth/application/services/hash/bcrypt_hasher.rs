use super::password_hasher::PasswordHasher;
use bcrypt::{hash, verify};
use std::env;

/// Default work factor; overridable via BCRYPT_COST for slower hardware
/// or faster test runs.
const DEFAULT_COST: u32 = 10;

#[derive(Debug, Clone)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn from_env() -> Self {
        let cost = env::var("BCRYPT_COST")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(DEFAULT_COST);
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash_password(&self, password: &str) -> Result<String, String> {
        hash(password, self.cost).map_err(|e| e.to_string())
    }

    fn verify_password(&self, password: &str, hashed: &str) -> Result<bool, String> {
        verify(password, hashed).map_err(|e| e.to_string())
    }
}
