use std::sync::Arc;

use uuid::Uuid;

use crate::{error::ProductResult, repository::ProductRepository};

pub struct DeleteProductUseCase<R> {
    repository: Arc<R>,
}

impl<R: ProductRepository> DeleteProductUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: Uuid) -> ProductResult<()> {
        self.repository.delete(id).await
    }
}
