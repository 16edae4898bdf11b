use super::password_hasher::PasswordHasher;
use std::sync::Arc;

/// Async facade over a blocking hasher. bcrypt is CPU-bound, so both
/// operations run on the blocking pool to keep the executor responsive.
#[derive(Clone)]
pub struct PasswordHashingService {
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl std::fmt::Debug for PasswordHashingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHashingService")
            .field("hasher", &"<dyn PasswordHasher>")
            .finish()
    }
}

impl PasswordHashingService {
    pub fn with_hasher(hasher: impl PasswordHasher + Send + Sync + 'static) -> Self {
        Self {
            hasher: Arc::new(hasher),
        }
    }

    pub async fn hash_password(&self, password: String) -> Result<String, String> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.hash_password(&password))
            .await
            .map_err(|e| e.to_string())?
    }

    pub async fn verify_password(&self, password: String, hash: String) -> Result<bool, String> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.verify_password(&password, &hash))
            .await
            .map_err(|e| e.to_string())?
    }
}

#[cfg(test)]
mod tests {
    use super::super::bcrypt_hasher::BcryptHasher;
    use super::*;

    #[tokio::test]
    async fn service_round_trips_through_blocking_pool() {
        let service = PasswordHashingService::with_hasher(BcryptHasher::new(4));

        let hash = service
            .hash_password("Password123".to_string())
            .await
            .expect("hashing should succeed");

        assert!(service
            .verify_password("Password123".to_string(), hash.clone())
            .await
            .unwrap());
        assert!(!service
            .verify_password("nope".to_string(), hash)
            .await
            .unwrap());
    }
}
