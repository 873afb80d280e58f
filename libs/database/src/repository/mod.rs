//! The generic repository contract and its SeaORM building block.

#[cfg(feature = "postgres")]
mod base;

#[cfg(feature = "postgres")]
pub use base::BaseRepository;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    error::RepositoryError,
    model::Model,
    search::{SearchParams, SearchResult},
};

/// Capabilities every entity store provides, for entity `M` created from
/// input `C`.
///
/// Domain crates extend this with natural-key lookups and fix `Error` to
/// their own error type.
#[async_trait]
pub trait Repository<M, C>: Send + Sync
where
    M: Model,
    C: Send + 'static,
{
    type Error: From<RepositoryError> + Send;

    /// Build a new entity with a fresh id and timestamps. Nothing is stored.
    fn create(&self, input: C) -> M;

    async fn insert(&self, entity: M) -> Result<M, Self::Error>;

    /// Fails with not-found carrying `id` when absent.
    async fn find_by_id(&self, id: Uuid) -> Result<M, Self::Error>;

    /// Replace an existing entity, keeping its `created_at` and refreshing
    /// `updated_at`.
    async fn update(&self, entity: M) -> Result<M, Self::Error>;

    async fn delete(&self, id: Uuid) -> Result<(), Self::Error>;

    /// Filter, sort and paginate.
    async fn search(&self, params: SearchParams) -> Result<SearchResult<M>, Self::Error>;
}
