use std::sync::Arc;

use database::{SearchParams, SearchResult};

use crate::{error::UserResult, models::UserOutput, repository::UserRepository};

pub struct SearchUsersUseCase<R> {
    repository: Arc<R>,
}

impl<R: UserRepository> SearchUsersUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, params: SearchParams) -> UserResult<SearchResult<UserOutput>> {
        let result = self.repository.search(params).await?;
        Ok(result.map(UserOutput::from))
    }
}
