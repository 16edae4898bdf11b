use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::token_config::TokenConfig;
use crate::modules::auth::application::domain::entities::TokenPurpose;

/// Claims embedded in every signed token.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: Uuid,
    pub purpose: TokenPurpose,
    pub iat: i64,
    pub exp: i64,
}

/// All verification failures collapse into this single variant so callers
/// cannot learn whether a token was malformed, forged, or merely expired.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Invalid or expired token")]
    Invalid,
    #[error("Token encoding failed: {0}")]
    EncodingFailed(String),
}

/// Signs and verifies compact, tamper-evident tokens. Purely computational;
/// the single-use guarantee lives in the verification ledger, not here.
#[derive(Clone)]
pub struct TokenCodec {
    config: TokenConfig,
    encoding_key: EncodingKey,
    decoding_keys: Vec<DecodingKey>,
}

// EncodingKey/DecodingKey don't implement Debug, so the keys are elided.
impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl TokenCodec {
    pub fn new(config: TokenConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());

        // Current secret first; the retired one is only consulted when the
        // primary signature check fails during a rotation window.
        let mut decoding_keys = vec![DecodingKey::from_secret(config.secret.as_bytes())];
        if let Some(previous) = &config.previous_secret {
            decoding_keys.push(DecodingKey::from_secret(previous.as_bytes()));
        }

        Self {
            config,
            encoding_key,
            decoding_keys,
        }
    }

    pub fn ttl_for(&self, purpose: TokenPurpose) -> Duration {
        let secs = match purpose {
            TokenPurpose::EmailVerification => self.config.verification_ttl_secs,
            TokenPurpose::ResetPassword => self.config.reset_ttl_secs,
            TokenPurpose::Login => self.config.session_ttl_secs,
            TokenPurpose::WorkspaceInvite => self.config.invite_ttl_secs,
        };
        Duration::seconds(secs)
    }

    /// Issue a token for `subject_id` with the purpose's configured TTL.
    pub fn issue(&self, subject_id: Uuid, purpose: TokenPurpose) -> Result<String, TokenError> {
        self.issue_with_ttl(subject_id, purpose, self.ttl_for(purpose))
    }

    pub fn issue_with_ttl(
        &self,
        subject_id: Uuid,
        purpose: TokenPurpose,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = TokenClaims {
            sub: subject_id,
            purpose,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify signature and structure, then expiry. Fails closed: any
    /// malformed, unsigned, foreign-signed, or expired input is `Invalid`.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false; // enforced manually below

        let claims = self
            .decoding_keys
            .iter()
            .find_map(|key| decode::<TokenClaims>(token, key, &validation).ok())
            .map(|data| data.claims)
            .ok_or(TokenError::Invalid)?;

        if claims.exp < Utc::now().timestamp() {
            return Err(TokenError::Invalid);
        }

        Ok(claims)
    }

    /// Verify and additionally require the embedded purpose tag. A token
    /// minted for one flow never authorizes another.
    pub fn verify_for(&self, token: &str, purpose: TokenPurpose) -> Result<TokenClaims, TokenError> {
        let claims = self.verify(token)?;
        if claims.purpose != purpose {
            return Err(TokenError::Invalid);
        }
        Ok(claims)
    }
}
