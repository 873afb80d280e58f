use std::sync::Arc;

use validator::Validate;

use crate::{
    error::{ProductError, ProductResult},
    models::{CreateProduct, ProductOutput},
    repository::ProductRepository,
};

pub struct CreateProductUseCase<R> {
    repository: Arc<R>,
}

impl<R: ProductRepository> CreateProductUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Fails with bad-request on an empty name or non-positive price or
    /// quantity, and with conflict when the name is already used.
    pub async fn execute(&self, input: CreateProduct) -> ProductResult<ProductOutput> {
        input.validate().map_err(|_| ProductError::invalid_input())?;
        self.repository.conflicting_name(&input.name).await?;

        let product = self.repository.create(input);
        let product = self.repository.insert(product).await?;
        Ok(product.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryProductRepository;
    use crate::usecases::mock::MockProductRepo;
    use database::Repository;

    fn input(name: &str, price: f64, quantity: i32) -> CreateProduct {
        CreateProduct {
            name: name.to_string(),
            price,
            quantity,
        }
    }

    #[tokio::test]
    async fn test_create_product() {
        let repository = Arc::new(InMemoryProductRepository::new());
        let use_case = CreateProductUseCase::new(Arc::clone(&repository));

        let output = use_case.execute(input("Product 1", 10.0, 5)).await.unwrap();
        assert_eq!(output.name, "Product 1");
        assert_eq!(output.price, 10.0);
        assert_eq!(output.quantity, 5);
        assert_eq!(output.created_at, output.updated_at);

        let stored = repository.find_by_id(output.id).await.unwrap();
        assert_eq!(ProductOutput::from(stored), output);
    }

    #[tokio::test]
    async fn test_create_same_name_twice_conflicts() {
        let use_case = CreateProductUseCase::new(Arc::new(InMemoryProductRepository::new()));

        use_case.execute(input("Product 1", 10.0, 5)).await.unwrap();
        let err = use_case.execute(input("Product 1", 20.0, 1)).await.unwrap_err();

        assert!(matches!(err, ProductError::Conflict));
        assert_eq!(err.to_string(), "Name already used on another product.");
    }

    #[tokio::test]
    async fn test_invalid_input_is_rejected_before_storage() {
        // No expectations: any repository call would panic.
        let use_case = CreateProductUseCase::new(Arc::new(MockProductRepo::new()));

        for bad in [
            input("", 10.0, 1),
            input("Product 1", 0.0, 1),
            input("Product 1", 10.0, 0),
            input("Product 1", 10.0, -2),
        ] {
            let err = use_case.execute(bad).await.unwrap_err();
            assert_eq!(err.to_string(), "Input data not provided or invalid");
        }
    }

    #[tokio::test]
    async fn test_storage_failure_propagates() {
        let mut repository = MockProductRepo::new();
        repository.expect_conflicting_name().returning(|_| Ok(()));
        repository
            .expect_create()
            .returning(|input| crate::models::Product::new(input));
        repository
            .expect_insert()
            .returning(|_| Err(ProductError::Internal("disk full".to_string())));

        let use_case = CreateProductUseCase::new(Arc::new(repository));
        let err = use_case.execute(input("Product 1", 10.0, 1)).await.unwrap_err();
        assert!(matches!(err, ProductError::Internal(_)));
    }
}
