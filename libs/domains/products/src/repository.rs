use async_trait::async_trait;
use database::{InMemoryRepository, Repository, SearchParams, SearchResult};
use uuid::Uuid;

use crate::{
    error::{ProductError, ProductResult},
    models::{CreateProduct, Product},
};

/// Product storage: the generic capabilities plus name lookups.
#[async_trait]
pub trait ProductRepository: Repository<Product, CreateProduct, Error = ProductError> {
    /// Fails with not-found when no product has exactly this name.
    async fn find_by_name(&self, name: &str) -> ProductResult<Product>;

    /// Products for the ids that exist, in request order. Unknown ids are
    /// skipped.
    async fn find_all_by_ids(&self, ids: &[Uuid]) -> ProductResult<Vec<Product>>;

    /// Fails with [`ProductError::Conflict`] when `name` is taken.
    async fn conflicting_name(&self, name: &str) -> ProductResult<()>;
}

/// In-memory product repository for tests and local development.
#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    store: InMemoryRepository<Product>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            store: InMemoryRepository::with_items(products),
        }
    }
}

#[async_trait]
impl Repository<Product, CreateProduct> for InMemoryProductRepository {
    type Error = ProductError;

    fn create(&self, input: CreateProduct) -> Product {
        Product::new(input)
    }

    async fn insert(&self, product: Product) -> ProductResult<Product> {
        let product = self.store.insert(product).await;
        tracing::info!(product_id = %product.id, "Created product");
        Ok(product)
    }

    async fn find_by_id(&self, id: Uuid) -> ProductResult<Product> {
        Ok(self.store.find_by_id(id).await?)
    }

    async fn update(&self, product: Product) -> ProductResult<Product> {
        let product = self.store.update(product).await?;
        tracing::info!(product_id = %product.id, "Updated product");
        Ok(product)
    }

    async fn delete(&self, id: Uuid) -> ProductResult<()> {
        self.store.delete(id).await?;
        tracing::info!(product_id = %id, "Deleted product");
        Ok(())
    }

    async fn search(&self, params: SearchParams) -> ProductResult<SearchResult<Product>> {
        Ok(self.store.search(&params).await)
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_by_name(&self, name: &str) -> ProductResult<Product> {
        self.store
            .find_first(|product| product.name == name)
            .await
            .ok_or_else(|| ProductError::NameNotFound(name.to_string()))
    }

    async fn find_all_by_ids(&self, ids: &[Uuid]) -> ProductResult<Vec<Product>> {
        let products = self.store.all().await;
        Ok(ids
            .iter()
            .filter_map(|id| products.iter().find(|product| product.id == *id).cloned())
            .collect())
    }

    async fn conflicting_name(&self, name: &str) -> ProductResult<()> {
        match self.store.find_first(|product| product.name == name).await {
            Some(_) => Err(ProductError::Conflict),
            None => Ok(()),
        }
    }
}
