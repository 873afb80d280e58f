use std::collections::HashMap;

use async_trait::async_trait;
use database::postgres::{collated_text, contains_pattern};
use database::{
    BaseRepository, Repository, SearchParams, SearchResult, Searchable, SortSpec, timestamp,
};
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, Order, PaginatorTrait,
    QueryFilter, QueryOrder, Select,
};
use uuid::Uuid;

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::{CreateProduct, Product},
    repository::ProductRepository,
};

#[derive(Clone)]
pub struct PgProductRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    fn by_name(name: &str) -> Select<entity::Entity> {
        entity::Entity::find().filter(entity::Column::Name.eq(name))
    }
}

/// Mirrors the in-memory ordering: byte-order names, then id for ties.
fn apply_order(query: Select<entity::Entity>, sort: &SortSpec) -> Select<entity::Entity> {
    let order = Order::from(sort.direction);
    let query = match sort.field.as_str() {
        "name" => query.order_by(Expr::cust(collated_text("name")), order),
        _ => query.order_by(entity::Column::CreatedAt, order),
    };
    query.order_by_asc(entity::Column::Id)
}

#[async_trait]
impl Repository<Product, CreateProduct> for PgProductRepository {
    type Error = ProductError;

    fn create(&self, input: CreateProduct) -> Product {
        Product::new(input)
    }

    async fn insert(&self, product: Product) -> ProductResult<Product> {
        let model = self.base.insert(entity::ActiveModel::from(product)).await?;
        tracing::info!(product_id = %model.id, "Created product");
        Ok(model.into())
    }

    async fn find_by_id(&self, id: Uuid) -> ProductResult<Product> {
        Ok(self.base.find_by_id(id).await?.into())
    }

    async fn update(&self, product: Product) -> ProductResult<Product> {
        let mut active = self.base.find_by_id(product.id).await?.into_active_model();
        active.name = Set(product.name);
        active.price = Set(product.price);
        active.quantity = Set(product.quantity);
        active.updated_at = Set(timestamp());

        let model = self.base.update(active).await?;
        tracing::info!(product_id = %model.id, "Updated product");
        Ok(model.into())
    }

    async fn delete(&self, id: Uuid) -> ProductResult<()> {
        self.base.delete_by_id(id).await?;
        tracing::info!(product_id = %id, "Deleted product");
        Ok(())
    }

    async fn search(&self, params: SearchParams) -> ProductResult<SearchResult<Product>> {
        let sort = params.resolve_sort(Product::SORTABLE_FIELDS);

        let mut query = entity::Entity::find();
        if let Some(filter) = params.filter() {
            query = query.filter(Expr::cust_with_values(
                "\"name\" ILIKE ?",
                [contains_pattern(filter)],
            ));
        }

        let (total, models) = self
            .base
            .fetch_counted_page(
                query,
                |query| apply_order(query, &sort),
                params.offset(),
                params.per_page(),
            )
            .await?;

        let items = models.into_iter().map(Product::from).collect();
        Ok(SearchResult::new(items, total, &params, sort))
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_by_name(&self, name: &str) -> ProductResult<Product> {
        Self::by_name(name)
            .one(self.base.db())
            .await?
            .map(Product::from)
            .ok_or_else(|| ProductError::NameNotFound(name.to_string()))
    }

    async fn find_all_by_ids(&self, ids: &[Uuid]) -> ProductResult<Vec<Product>> {
        let found: HashMap<Uuid, entity::Model> = entity::Entity::find()
            .filter(entity::Column::Id.is_in(ids.iter().copied()))
            .all(self.base.db())
            .await?
            .into_iter()
            .map(|model| (model.id, model))
            .collect();

        Ok(ids
            .iter()
            .filter_map(|id| found.get(id).cloned())
            .map(Product::from)
            .collect())
    }

    async fn conflicting_name(&self, name: &str) -> ProductResult<()> {
        if Self::by_name(name).count(self.base.db()).await? > 0 {
            return Err(ProductError::Conflict);
        }
        Ok(())
    }
}
