//! Products Domain
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │  Use cases  │  ← One struct per operation, business rules
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Trait + in-memory and PostgreSQL implementations
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, inputs, output DTO
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domain_products::{handlers, PgProductRepository, ProductUseCases};
//!
//! let repository = Arc::new(PgProductRepository::new(db));
//! let router = handlers::router(ProductUseCases::new(repository));
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod usecases;

pub use database::{SearchParams, SearchResult, SortDirection};
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{CreateProduct, Product, ProductOutput, UpdateProduct};
pub use postgres::PgProductRepository;
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use usecases::{
    CreateProductUseCase, DeleteProductUseCase, GetProductUseCase, ProductUseCases,
    SearchProductsUseCase, UpdateProductUseCase,
};
