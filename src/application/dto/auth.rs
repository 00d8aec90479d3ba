use crate::domain::post::AuthorId;
use chrono::{DateTime, Utc};

/// Caller identity established from a verified identity-provider token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: AuthorId,
    pub session_id: Option<String>,
    pub expires_at: DateTime<Utc>,
}
