use chrono::{Duration, Utc};
use core_config::JwtConfig;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String, // Subject (user ID)
    pub exp: i64,
    pub iat: i64,
    pub jti: String,
}

/// Issues and verifies access tokens signed with a shared secret.
#[derive(Clone)]
pub struct JwtAuth {
    encoding: EncodingKey,
    decoding: DecodingKey,
    expires_in: Duration,
}

impl JwtAuth {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.secret.as_bytes()),
            expires_in: Duration::seconds(config.expires_in_secs),
        }
    }

    pub fn create_access_token(&self, subject: &str) -> jsonwebtoken::errors::Result<String> {
        let now = Utc::now();
        let claims = JwtClaims {
            sub: subject.to_string(),
            exp: (now + self.expires_in).timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Check signature and expiry and return the claims.
    pub fn verify_token(&self, token: &str) -> jsonwebtoken::errors::Result<JwtClaims> {
        decode::<JwtClaims>(token, &self.decoding, &Validation::default()).map(|data| data.claims)
    }
}

impl std::fmt::Debug for JwtAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtAuth")
            .field("expires_in", &self.expires_in)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth(expires_in_secs: i64) -> JwtAuth {
        JwtAuth::new(&JwtConfig::new("test-secret", expires_in_secs))
    }

    #[test]
    fn test_token_round_trip() {
        let auth = auth(3600);
        let token = auth.create_access_token("user-1").unwrap();

        let claims = auth.verify_token(&token).unwrap();
        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let token = auth(3600).create_access_token("user-1").unwrap();
        let other = JwtAuth::new(&JwtConfig::new("other-secret", 3600));
        assert!(other.verify_token(&token).is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let auth = auth(-3600);
        let token = auth.create_access_token("user-1").unwrap();
        assert!(auth.verify_token(&token).is_err());
    }
}
