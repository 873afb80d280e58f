use std::sync::Arc;

use uuid::Uuid;

use crate::{error::ProductResult, models::ProductOutput, repository::ProductRepository};

pub struct GetProductUseCase<R> {
    repository: Arc<R>,
}

impl<R: ProductRepository> GetProductUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: Uuid) -> ProductResult<ProductOutput> {
        Ok(self.repository.find_by_id(id).await?.into())
    }
}
