//! Persistence building blocks shared by the domain crates.
//!
//! - [`search`]: search parameters, paged results and the per-entity
//!   [`Searchable`] strategy
//! - [`memory`]: a generic in-memory store implementing filter/sort/paginate
//! - [`repository`]: the generic [`Repository`] contract and, with the
//!   `postgres` feature, the SeaORM-backed [`BaseRepository`]
//! - [`postgres`]: connection pool, migrations and health checks
//!
//! # Features
//!
//! - `postgres` (default) - PostgreSQL support with SeaORM
//! - `config` - `core_config::FromEnv` for [`postgres::PostgresConfig`]
//!
//! ```ignore
//! use database::postgres;
//! use migration::Migrator;
//!
//! let db = postgres::connect_from_config(config).await?;
//! postgres::run_migrations::<Migrator>(&db, "shop_api").await?;
//! ```

pub mod error;
pub mod memory;
pub mod model;
pub mod repository;
pub mod search;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use error::{DatabaseError, DatabaseResult, RepositoryError, RepositoryResult};
pub use memory::InMemoryRepository;
pub use model::{Model, timestamp};
pub use repository::Repository;
pub use search::{SearchParams, SearchResult, Searchable, SortDirection, SortKey, SortSpec};

#[cfg(feature = "postgres")]
pub use repository::BaseRepository;
