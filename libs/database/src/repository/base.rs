use std::marker::PhantomData;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, PrimaryKeyTrait, QuerySelect, Select,
};
use uuid::Uuid;

use crate::error::{RepositoryError, RepositoryResult};

/// Common SeaORM operations for entities keyed by a UUID.
///
/// Domain repositories hold one of these and build entity-specific queries
/// on top of [`BaseRepository::db`].
pub struct BaseRepository<E> {
    db: DatabaseConnection,
    _entity: PhantomData<E>,
}

impl<E> Clone for BaseRepository<E> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E> BaseRepository<E>
where
    E: EntityTrait,
    E::Model: Sync,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<Uuid>,
{
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub async fn insert<A>(&self, model: A) -> RepositoryResult<E::Model>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        Ok(model.insert(&self.db).await?)
    }

    pub async fn find_by_id(&self, id: Uuid) -> RepositoryResult<E::Model> {
        E::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(RepositoryError::NotFound(id))
    }

    pub async fn update<A>(&self, model: A) -> RepositoryResult<E::Model>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        Ok(model.update(&self.db).await?)
    }

    pub async fn delete_by_id(&self, id: Uuid) -> RepositoryResult<()> {
        let result = E::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound(id));
        }
        Ok(())
    }

    pub async fn count(&self, query: Select<E>) -> RepositoryResult<u64> {
        Ok(query.count(&self.db).await?)
    }

    /// Count the filtered `query`, then fetch one page of it in `order`.
    ///
    /// Pages starting at or past the total come back empty without a second
    /// round trip.
    pub async fn fetch_counted_page(
        &self,
        query: Select<E>,
        order: impl FnOnce(Select<E>) -> Select<E>,
        offset: u64,
        limit: u64,
    ) -> RepositoryResult<(u64, Vec<E::Model>)> {
        let total = self.count(query.clone()).await?;
        if offset >= total {
            return Ok((total, Vec::new()));
        }
        let models = self.fetch_page(order(query), offset, limit).await?;
        Ok((total, models))
    }

    /// Run an already filtered and ordered query for one page.
    pub async fn fetch_page(
        &self,
        query: Select<E>,
        offset: u64,
        limit: u64,
    ) -> RepositoryResult<Vec<E::Model>> {
        Ok(query.offset(offset).limit(limit).all(&self.db).await?)
    }
}
