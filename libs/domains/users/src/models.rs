use chrono::{DateTime, Utc};
use database::{Model, SortKey, Searchable, timestamp};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

pub const DEFAULT_AVATAR: &str = "https://github.com/shadcn.png";

/// User entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Argon2 PHC hash (never exposed in API responses)
    #[serde(skip_serializing)]
    pub password: String,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// New user with a time-ordered id. `input.password` must already be
    /// hashed. Not persisted.
    pub fn new(input: CreateUser) -> Self {
        let now = timestamp();
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            email: input.email,
            password: input.password,
            avatar: Some(DEFAULT_AVATAR.to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, update: UpdateUser) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(avatar) = update.avatar {
            self.avatar = Some(avatar);
        }
    }
}

impl Model for User {
    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn set_timestamps(&mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) {
        self.created_at = created_at;
        self.updated_at = updated_at;
    }
}

impl Searchable for User {
    const SORTABLE_FIELDS: &'static [&'static str] = &["name", "email", "created_at"];

    fn filter_text(&self) -> &str {
        &self.name
    }

    fn sort_key(&self, field: &str) -> Option<SortKey<'_>> {
        match field {
            "name" => Some(SortKey::Text(&self.name)),
            "email" => Some(SortKey::Text(&self.email)),
            "created_at" => Some(SortKey::Timestamp(self.created_at)),
            _ => None,
        }
    }
}

/// DTO for creating a user
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email, length(min = 1, max = 255))]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// DTO for updating a user; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateUser {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(email, length(min = 1, max = 255))]
    pub email: Option<String>,
    #[validate(length(min = 1))]
    pub avatar: Option<String>,
}

/// DTO for changing a password
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdatePassword {
    #[validate(length(min = 1))]
    pub old_password: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Successful login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AccessToken {
    /// HS256-signed JWT whose subject is the user ID
    pub access_token: String,
}

/// User as returned by the API, without the password hash
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserOutput {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserOutput {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            avatar: user.avatar,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
