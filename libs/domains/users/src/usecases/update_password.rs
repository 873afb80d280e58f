use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{UserError, UserResult},
    models::{UpdatePassword, UserOutput},
    password::{hash_password, verify_password},
    repository::UserRepository,
};

pub struct UpdatePasswordUseCase<R> {
    repository: Arc<R>,
}

impl<R: UserRepository> UpdatePasswordUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Replaces the hash after checking `old_password` against the stored one.
    pub async fn execute(&self, id: Uuid, input: UpdatePassword) -> UserResult<UserOutput> {
        input.validate().map_err(|_| UserError::invalid_input())?;

        let mut user = self.repository.find_by_id(id).await?;
        if !verify_password(&input.old_password, &user.password)? {
            return Err(UserError::BadRequest("Old password does not match".to_string()));
        }

        user.password = hash_password(&input.password)?;
        Ok(self.repository.update(user).await?.into())
    }
}
