use std::env;

/// Signing material and per-purpose TTLs for the token codec.
///
/// `previous_secret` supports rotation: tokens signed with the old secret
/// keep verifying until the rotation window closes, while new tokens are
/// always signed with `secret`.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    pub secret: String,
    pub previous_secret: Option<String>,
    pub verification_ttl_secs: i64,
    pub reset_ttl_secs: i64,
    pub session_ttl_secs: i64,
    pub invite_ttl_secs: i64,
}

impl TokenConfig {
    /// Load token configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let secret = env::var("TOKEN_SECRET").expect("TOKEN_SECRET must be set");
        let previous_secret = env::var("TOKEN_SECRET_PREVIOUS").ok().filter(|s| !s.is_empty());

        let ttl = |key: &str, default: i64| -> i64 {
            env::var(key)
                .ok()
                .map(|v| v.parse::<i64>().unwrap_or_else(|_| panic!("Invalid {key} value")))
                .unwrap_or(default)
        };

        Self {
            secret,
            previous_secret,
            verification_ttl_secs: ttl("VERIFICATION_TOKEN_TTL_SECS", 3600), // 1 hour
            reset_ttl_secs: ttl("RESET_TOKEN_TTL_SECS", 900),                // 15 minutes
            session_ttl_secs: ttl("SESSION_TOKEN_TTL_SECS", 604800),         // 7 days
            invite_ttl_secs: ttl("INVITE_TOKEN_TTL_SECS", 604800),           // 7 days
        }
    }
}
