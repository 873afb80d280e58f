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
    error::{UserError, UserResult},
    models::{CreateUser, User},
    repository::UserRepository,
};

#[derive(Clone)]
pub struct PgUserRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    fn by_email(email: &str) -> Select<entity::Entity> {
        entity::Entity::find().filter(entity::Column::Email.eq(email))
    }
}

fn apply_order(query: Select<entity::Entity>, sort: &SortSpec) -> Select<entity::Entity> {
    let order = Order::from(sort.direction);
    let query = match sort.field.as_str() {
        "name" => query.order_by(Expr::cust(collated_text("name")), order),
        "email" => query.order_by(Expr::cust(collated_text("email")), order),
        _ => query.order_by(entity::Column::CreatedAt, order),
    };
    query.order_by_asc(entity::Column::Id)
}

#[async_trait]
impl Repository<User, CreateUser> for PgUserRepository {
    type Error = UserError;

    fn create(&self, input: CreateUser) -> User {
        User::new(input)
    }

    async fn insert(&self, user: User) -> UserResult<User> {
        let model = self.base.insert(entity::ActiveModel::from(user)).await?;
        tracing::info!(user_id = %model.id, email = %model.email, "Created user");
        Ok(model.into())
    }

    async fn find_by_id(&self, id: Uuid) -> UserResult<User> {
        Ok(self.base.find_by_id(id).await?.into())
    }

    async fn update(&self, user: User) -> UserResult<User> {
        let mut active = self.base.find_by_id(user.id).await?.into_active_model();
        active.name = Set(user.name);
        active.email = Set(user.email);
        active.password = Set(user.password);
        active.avatar = Set(user.avatar);
        active.updated_at = Set(timestamp());

        let model = self.base.update(active).await?;
        tracing::info!(user_id = %model.id, "Updated user");
        Ok(model.into())
    }

    async fn delete(&self, id: Uuid) -> UserResult<()> {
        self.base.delete_by_id(id).await?;
        tracing::info!(user_id = %id, "Deleted user");
        Ok(())
    }

    async fn search(&self, params: SearchParams) -> UserResult<SearchResult<User>> {
        let sort = params.resolve_sort(User::SORTABLE_FIELDS);

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

        let items = models.into_iter().map(User::from).collect();
        Ok(SearchResult::new(items, total, &params, sort))
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_email(&self, email: &str) -> UserResult<User> {
        Self::by_email(email)
            .one(self.base.db())
            .await?
            .map(User::from)
            .ok_or_else(|| UserError::EmailNotFound(email.to_string()))
    }

    async fn find_by_name(&self, name: &str) -> UserResult<User> {
        entity::Entity::find()
            .filter(entity::Column::Name.eq(name))
            .one(self.base.db())
            .await?
            .map(User::from)
            .ok_or_else(|| UserError::NameNotFound(name.to_string()))
    }

    async fn conflicting_email(&self, email: &str) -> UserResult<()> {
        if Self::by_email(email).count(self.base.db()).await? > 0 {
            return Err(UserError::Conflict);
        }
        Ok(())
    }
}
