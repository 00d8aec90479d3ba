// tests/support/mocks/security.rs
use async_trait::async_trait;
use blog_core::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
    ports::identity::IdentityVerifier,
};
use blog_core::domain::post::AuthorId;

use super::time::fixed_now;

pub const TEST_TOKEN: &str = "test-token";
pub const OTHER_TOKEN: &str = "other-token";
pub const EXPIRED_TOKEN: &str = "expired-token";

pub const TEST_USER: &str = "user_test";
pub const OTHER_USER: &str = "user_other";

/// 固定トークンのみを受け付けるダミー検証器
pub struct DummyIdentityVerifier;

#[async_trait]
impl IdentityVerifier for DummyIdentityVerifier {
    async fn verify(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let subject = match token {
            TEST_TOKEN => TEST_USER,
            OTHER_TOKEN => OTHER_USER,
            EXPIRED_TOKEN => return Err(ApplicationError::unauthorized("token expired")),
            _ => return Err(ApplicationError::unauthorized("invalid token")),
        };

        Ok(AuthenticatedUser {
            id: AuthorId::new(subject)?,
            session_id: Some(format!("session-{subject}")),
            expires_at: fixed_now() + chrono::Duration::hours(1),
        })
    }
}
