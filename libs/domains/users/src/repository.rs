use async_trait::async_trait;
use database::{InMemoryRepository, Repository, SearchParams, SearchResult};
use uuid::Uuid;

use crate::{
    error::{UserError, UserResult},
    models::{CreateUser, User},
};

/// User storage: the generic capabilities plus email and name lookups.
#[async_trait]
pub trait UserRepository: Repository<User, CreateUser, Error = UserError> {
    async fn find_by_email(&self, email: &str) -> UserResult<User>;

    /// Any user called `name`; names are not unique.
    async fn find_by_name(&self, name: &str) -> UserResult<User>;

    /// Fails with [`UserError::Conflict`] when `email` is taken.
    async fn conflicting_email(&self, email: &str) -> UserResult<()>;
}

/// In-memory implementation of UserRepository (for development/testing)
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    store: InMemoryRepository<User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            store: InMemoryRepository::with_items(users),
        }
    }
}

#[async_trait]
impl Repository<User, CreateUser> for InMemoryUserRepository {
    type Error = UserError;

    fn create(&self, input: CreateUser) -> User {
        User::new(input)
    }

    async fn insert(&self, user: User) -> UserResult<User> {
        let user = self.store.insert(user).await;
        tracing::info!(user_id = %user.id, email = %user.email, "Created user");
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> UserResult<User> {
        Ok(self.store.find_by_id(id).await?)
    }

    async fn update(&self, user: User) -> UserResult<User> {
        let user = self.store.update(user).await?;
        tracing::info!(user_id = %user.id, "Updated user");
        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> UserResult<()> {
        self.store.delete(id).await?;
        tracing::info!(user_id = %id, "Deleted user");
        Ok(())
    }

    async fn search(&self, params: SearchParams) -> UserResult<SearchResult<User>> {
        Ok(self.store.search(&params).await)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> UserResult<User> {
        self.store
            .find_first(|user| user.email == email)
            .await
            .ok_or_else(|| UserError::EmailNotFound(email.to_string()))
    }

    async fn find_by_name(&self, name: &str) -> UserResult<User> {
        self.store
            .find_first(|user| user.name == name)
            .await
            .ok_or_else(|| UserError::NameNotFound(name.to_string()))
    }

    async fn conflicting_email(&self, email: &str) -> UserResult<()> {
        match self.store.find_first(|user| user.email == email).await {
            Some(_) => Err(UserError::Conflict),
            None => Ok(()),
        }
    }
}
