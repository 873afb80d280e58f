use std::sync::Arc;

use uuid::Uuid;

use crate::{error::UserResult, repository::UserRepository};

pub struct DeleteUserUseCase<R> {
    repository: Arc<R>,
}

impl<R: UserRepository> DeleteUserUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: Uuid) -> UserResult<()> {
        self.repository.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UserError;
    use crate::repository::InMemoryUserRepository;
    use crate::usecases::fixtures::stored_user;

    #[tokio::test]
    async fn test_delete_user() {
        let repository = Arc::new(InMemoryUserRepository::new());
        let user = stored_user(&repository, "sample@mail.com").await;
        let use_case = DeleteUserUseCase::new(repository);

        use_case.execute(user.id).await.unwrap();
        let err = use_case.execute(user.id).await.unwrap_err();
        assert!(matches!(err, UserError::NotFound(id) if id == user.id));
    }
}
