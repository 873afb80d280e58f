use crate::{ConfigError, Environment, FromEnv, env_or_default, env_parse, env_required};

const DEV_SECRET: &str = "development-secret-change-me";

/// Signing settings for access tokens.
#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub expires_in_secs: i64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>, expires_in_secs: i64) -> Self {
        Self {
            secret: secret.into(),
            expires_in_secs,
        }
    }
}

impl FromEnv for JwtConfig {
    /// `JWT_SECRET` is mandatory in production; development falls back to a
    /// fixed secret. `JWT_EXPIRES_IN_SECS` defaults to one day.
    fn from_env() -> Result<Self, ConfigError> {
        let secret = if Environment::from_env().is_production() {
            env_required("JWT_SECRET")?
        } else {
            env_or_default("JWT_SECRET", DEV_SECRET)
        };
        let expires_in_secs = env_parse("JWT_EXPIRES_IN_SECS", "86400")?;

        Ok(Self {
            secret,
            expires_in_secs,
        })
    }
}
