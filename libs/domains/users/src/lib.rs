//! Users Domain
//!
//! User accounts with Argon2 password hashing, plus email/password login
//! that issues JWT access tokens.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← /users and /auth/login endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │  Use cases  │  ← Business rules, password hashing, token issuing
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
//! use domain_users::{handlers, AuthenticateUserUseCase, InMemoryUserRepository, UserUseCases};
//!
//! let repository = Arc::new(InMemoryUserRepository::new());
//! let users = handlers::router(UserUseCases::new(Arc::clone(&repository)));
//! let auth = handlers::auth_router(AuthenticateUserUseCase::new(repository, jwt_auth));
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod password;
pub mod postgres;
pub mod repository;
pub mod usecases;

pub use database::{SearchParams, SearchResult, SortDirection};
pub use error::{UserError, UserResult};
pub use handlers::{ApiDoc, AuthApiDoc};
pub use models::{
    AccessToken, CreateUser, DEFAULT_AVATAR, LoginRequest, UpdatePassword, UpdateUser, User,
    UserOutput,
};
pub use postgres::PgUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use usecases::{
    AuthenticateUserUseCase, CreateUserUseCase, DeleteUserUseCase, GetUserUseCase,
    SearchUsersUseCase, UpdatePasswordUseCase, UpdateUserUseCase, UserUseCases,
};
