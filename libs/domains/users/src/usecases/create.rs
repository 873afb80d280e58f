use std::sync::Arc;

use validator::Validate;

use crate::{
    error::{UserError, UserResult},
    models::{CreateUser, UserOutput},
    password::hash_password,
    repository::UserRepository,
};

pub struct CreateUserUseCase<R> {
    repository: Arc<R>,
}

impl<R: UserRepository> CreateUserUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, mut input: CreateUser) -> UserResult<UserOutput> {
        input.validate().map_err(|_| UserError::invalid_input())?;
        self.repository.conflicting_email(&input.email).await?;

        input.password = hash_password(&input.password)?;
        let user = self.repository.create(input);
        let user = self.repository.insert(user).await?;
        Ok(user.into())
    }
}
