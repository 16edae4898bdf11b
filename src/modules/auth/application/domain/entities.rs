use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered account. The password hash never leaves the auth module;
/// responses carry [`SanitizedUser`] instead.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub is_email_verified: bool,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn sanitized(&self) -> SanitizedUser {
        SanitizedUser {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
            is_email_verified: self.is_email_verified,
            last_login_at: self.last_login_at,
        }
    }
}

/// User representation safe to serialize to callers.
#[derive(Debug, Clone, serde::Serialize, utoipa::ToSchema)]
pub struct SanitizedUser {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub is_email_verified: bool,
    pub last_login_at: Option<DateTime<Utc>>,
}

/// A single-use credential in the verification ledger.
///
/// Once consumed (deleted) or past `expires_at` a record never authorizes
/// an action again; expired rows are lazily removed when next encountered.
#[derive(Debug, Clone)]
pub struct VerificationRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub token: String,
    pub purpose: TokenPurpose,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl VerificationRecord {
    pub fn new(
        user_id: Uuid,
        token: String,
        purpose: TokenPurpose,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            token,
            purpose,
            expires_at,
            created_at: Utc::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at < Utc::now()
    }
}

/// Tag restricting which flow may consume a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TokenPurpose {
    #[serde(rename = "email-verification")]
    EmailVerification,
    #[serde(rename = "reset-password")]
    ResetPassword,
    #[serde(rename = "login")]
    Login,
    #[serde(rename = "workspace-invite")]
    WorkspaceInvite,
}

impl TokenPurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenPurpose::EmailVerification => "email-verification",
            TokenPurpose::ResetPassword => "reset-password",
            TokenPurpose::Login => "login",
            TokenPurpose::WorkspaceInvite => "workspace-invite",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "email-verification" => Some(TokenPurpose::EmailVerification),
            "reset-password" => Some(TokenPurpose::ResetPassword),
            "login" => Some(TokenPurpose::Login),
            "workspace-invite" => Some(TokenPurpose::WorkspaceInvite),
            _ => None,
        }
    }
}

impl std::fmt::Display for TokenPurpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
