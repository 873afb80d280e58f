use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{ProductError, ProductResult},
    models::{ProductOutput, UpdateProduct},
    repository::ProductRepository,
};

pub struct UpdateProductUseCase<R> {
    repository: Arc<R>,
}

impl<R: ProductRepository> UpdateProductUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Fails with conflict when the name changes to one already in use.
    pub async fn execute(&self, id: Uuid, input: UpdateProduct) -> ProductResult<ProductOutput> {
        input.validate().map_err(|_| ProductError::invalid_input())?;

        let mut product = self.repository.find_by_id(id).await?;
        if let Some(name) = input.name.as_deref() {
            if name != product.name {
                self.repository.conflicting_name(name).await?;
            }
        }

        product.apply(input);
        Ok(self.repository.update(product).await?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CreateProduct, Product};
    use crate::repository::InMemoryProductRepository;
    use database::Repository;

    async fn with_products(names: &[&str]) -> (Arc<InMemoryProductRepository>, Vec<Product>) {
        let repository = Arc::new(InMemoryProductRepository::new());
        let mut products = Vec::new();
        for name in names {
            let product = repository
                .insert(repository.create(CreateProduct {
                    name: name.to_string(),
                    price: 10.0,
                    quantity: 1,
                }))
                .await
                .unwrap();
            products.push(product);
        }
        (repository, products)
    }

    #[tokio::test]
    async fn test_update_product() {
        let (repository, products) = with_products(&["Product 1"]).await;
        let use_case = UpdateProductUseCase::new(Arc::clone(&repository));

        let output = use_case
            .execute(
                products[0].id,
                UpdateProduct {
                    name: Some("Product 1".to_string()),
                    price: Some(12.5),
                    quantity: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(output.price, 12.5);
        assert_eq!(output.quantity, 1);
        assert_eq!(output.created_at, products[0].created_at);
        assert!(output.updated_at >= products[0].updated_at);
    }

    #[tokio::test]
    async fn test_rename_to_taken_name_conflicts() {
        let (repository, products) = with_products(&["Product 1", "Product 2"]).await;
        let use_case = UpdateProductUseCase::new(repository);

        let err = use_case
            .execute(
                products[1].id,
                UpdateProduct {
                    name: Some("Product 1".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ProductError::Conflict));
    }

    #[tokio::test]
    async fn test_update_missing_product() {
        let (repository, _) = with_products(&[]).await;
        let use_case = UpdateProductUseCase::new(repository);

        let err = use_case
            .execute(Uuid::now_v7(), UpdateProduct::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ProductError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_non_positive_quantity_is_rejected() {
        let (repository, products) = with_products(&["Product 1"]).await;
        let use_case = UpdateProductUseCase::new(repository);

        let err = use_case
            .execute(
                products[0].id,
                UpdateProduct {
                    quantity: Some(0),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ProductError::BadRequest(_)));
    }
}
