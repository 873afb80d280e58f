use std::sync::Arc;

use uuid::Uuid;

use crate::{error::UserResult, models::UserOutput, repository::UserRepository};

pub struct GetUserUseCase<R> {
    repository: Arc<R>,
}

impl<R: UserRepository> GetUserUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: Uuid) -> UserResult<UserOutput> {
        Ok(self.repository.find_by_id(id).await?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UserError;
    use crate::repository::InMemoryUserRepository;
    use crate::usecases::fixtures::stored_user;

    #[tokio::test]
    async fn test_get_user() {
        let repository = Arc::new(InMemoryUserRepository::new());
        let user = stored_user(&repository, "sample@mail.com").await;
        let use_case = GetUserUseCase::new(repository);

        let output = use_case.execute(user.id).await.unwrap();
        assert_eq!(output, UserOutput::from(user));

        let err = use_case.execute(Uuid::now_v7()).await.unwrap_err();
        assert!(matches!(err, UserError::NotFound(_)));
    }
}
