use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{UserError, UserResult},
    models::{UpdateUser, UserOutput},
    repository::UserRepository,
};

pub struct UpdateUserUseCase<R> {
    repository: Arc<R>,
}

impl<R: UserRepository> UpdateUserUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Fails with conflict when the email changes to one already in use.
    pub async fn execute(&self, id: Uuid, input: UpdateUser) -> UserResult<UserOutput> {
        input.validate().map_err(|_| UserError::invalid_input())?;

        let mut user = self.repository.find_by_id(id).await?;
        if let Some(email) = input.email.as_deref() {
            if email != user.email {
                self.repository.conflicting_email(email).await?;
            }
        }

        user.apply(input);
        Ok(self.repository.update(user).await?.into())
    }
}
