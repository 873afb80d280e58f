//! One struct per product operation. Each validates its input, applies the
//! business rules and maps the stored entity to [`ProductOutput`].
//!
//! [`ProductOutput`]: crate::models::ProductOutput

mod create;
mod delete;
mod get;
mod search;
mod update;

pub use create::CreateProductUseCase;
pub use delete::DeleteProductUseCase;
pub use get::GetProductUseCase;
pub use search::SearchProductsUseCase;
pub use update::UpdateProductUseCase;

use std::sync::Arc;

use crate::repository::ProductRepository;

/// Every product use case wired to one repository.
pub struct ProductUseCases<R> {
    pub create: CreateProductUseCase<R>,
    pub get: GetProductUseCase<R>,
    pub update: UpdateProductUseCase<R>,
    pub delete: DeleteProductUseCase<R>,
    pub search: SearchProductsUseCase<R>,
}

impl<R: ProductRepository> ProductUseCases<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            create: CreateProductUseCase::new(Arc::clone(&repository)),
            get: GetProductUseCase::new(Arc::clone(&repository)),
            update: UpdateProductUseCase::new(Arc::clone(&repository)),
            delete: DeleteProductUseCase::new(Arc::clone(&repository)),
            search: SearchProductsUseCase::new(repository),
        }
    }
}
