use std::sync::Arc;

use axum_helpers::JwtAuth;
use validator::Validate;

use crate::{
    error::{UserError, UserResult},
    models::{AccessToken, LoginRequest},
    password::verify_password,
    repository::UserRepository,
};

pub struct AuthenticateUserUseCase<R> {
    repository: Arc<R>,
    jwt: JwtAuth,
}

impl<R: UserRepository> AuthenticateUserUseCase<R> {
    pub fn new(repository: Arc<R>, jwt: JwtAuth) -> Self {
        Self { repository, jwt }
    }

    /// Unknown email and wrong password fail the same way.
    pub async fn execute(&self, input: LoginRequest) -> UserResult<AccessToken> {
        input.validate().map_err(|_| UserError::invalid_input())?;

        let user = match self.repository.find_by_email(&input.email).await {
            Ok(user) => user,
            Err(UserError::EmailNotFound(_)) => return Err(UserError::InvalidCredentials),
            Err(e) => return Err(e),
        };

        if !verify_password(&input.password, &user.password)? {
            tracing::info!(user_id = %user.id, "Rejected login with wrong password");
            return Err(UserError::InvalidCredentials);
        }

        let access_token = self
            .jwt
            .create_access_token(&user.id.to_string())
            .map_err(|e| UserError::Internal(format!("Failed to sign token: {}", e)))?;

        tracing::info!(user_id = %user.id, "User logged in");
        Ok(AccessToken { access_token })
    }
}
