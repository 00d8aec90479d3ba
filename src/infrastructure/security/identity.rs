// src/infrastructure/security/identity.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
    ports::identity::IdentityVerifier,
};
use crate::domain::post::AuthorId;
use async_trait::async_trait;
use chrono::DateTime;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

/// Claims read from identity-provider access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityClaims {
    pub sub: String,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
}

/// Verifies HS256 access tokens signed with the provider's shared secret.
#[derive(Clone)]
pub struct JwtIdentityVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl JwtIdentityVerifier {
    pub fn new(secret: &str, issuer: Option<&str>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "sub"]);
        if let Some(issuer) = issuer {
            validation.set_issuer(&[issuer]);
        }

        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }
}

#[async_trait]
impl IdentityVerifier for JwtIdentityVerifier {
    async fn verify(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let data = decode::<IdentityClaims>(token, &self.key, &self.validation).map_err(|err| {
            tracing::debug!(error = %err, "rejected identity token");
            ApplicationError::unauthorized("invalid or expired token")
        })?;
        let claims = data.claims;

        let id = AuthorId::new(claims.sub)
            .map_err(|_| ApplicationError::unauthorized("token subject is empty"))?;
        let expires_at = DateTime::from_timestamp(claims.exp, 0)
            .ok_or_else(|| ApplicationError::unauthorized("token expiry out of range"))?;

        Ok(AuthenticatedUser {
            id,
            session_id: claims.sid,
            expires_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use jsonwebtoken::{EncodingKey, Header, encode};

    const SECRET: &str = "test-secret";

    fn token(secret: &str, sub: &str, exp_offset: Duration, iss: Option<&str>) -> String {
        let claims = IdentityClaims {
            sub: sub.into(),
            exp: (Utc::now() + exp_offset).timestamp(),
            sid: Some("session-1".into()),
            iss: iss.map(str::to_owned),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn accepts_valid_token() {
        let verifier = JwtIdentityVerifier::new(SECRET, None);
        let user = verifier
            .verify(&token(SECRET, "user_1", Duration::hours(1), None))
            .await
            .unwrap();
        assert_eq!(user.id.as_str(), "user_1");
        assert_eq!(user.session_id.as_deref(), Some("session-1"));
    }

    #[tokio::test]
    async fn rejects_wrong_secret_and_expired_tokens() {
        let verifier = JwtIdentityVerifier::new(SECRET, None);
        let forged = token("other", "user_1", Duration::hours(1), None);
        assert!(matches!(
            verifier.verify(&forged).await,
            Err(ApplicationError::Unauthorized(_))
        ));

        let expired = token(SECRET, "user_1", Duration::hours(-2), None);
        assert!(matches!(
            verifier.verify(&expired).await,
            Err(ApplicationError::Unauthorized(_))
        ));
    }

    #[tokio::test]
    async fn enforces_issuer_when_configured() {
        let verifier = JwtIdentityVerifier::new(SECRET, Some("https://id.example.com"));
        let good = token(
            SECRET,
            "user_1",
            Duration::hours(1),
            Some("https://id.example.com"),
        );
        assert!(verifier.verify(&good).await.is_ok());

        let other = token(SECRET, "user_1", Duration::hours(1), Some("https://evil"));
        assert!(verifier.verify(&other).await.is_err());
    }
}
