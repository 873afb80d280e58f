use std::sync::Arc;

use database::{SearchParams, SearchResult};

use crate::{error::ProductResult, models::ProductOutput, repository::ProductRepository};

pub struct SearchProductsUseCase<R> {
    repository: Arc<R>,
}

impl<R: ProductRepository> SearchProductsUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, params: SearchParams) -> ProductResult<SearchResult<ProductOutput>> {
        let result = self.repository.search(params).await?;
        Ok(result.map(ProductOutput::from))
    }
}
