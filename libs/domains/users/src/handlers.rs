//! HTTP handlers for the Users and Auth APIs

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
};
use axum_helpers::{
    ErrorResponse, InternalErrorResponse, QueryParams, UuidPath, ValidatedJson,
};
use database::{SearchParams, SearchResult, SortDirection};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::UserResult;
use crate::models::{AccessToken, CreateUser, LoginRequest, UpdatePassword, UpdateUser, UserOutput};
use crate::repository::UserRepository;
use crate::usecases::{AuthenticateUserUseCase, UserUseCases};

/// OpenAPI documentation for Users API
#[derive(OpenApi)]
#[openapi(
    paths(
        search_users,
        create_user,
        get_user,
        update_user,
        update_password,
        delete_user,
    ),
    components(schemas(
        UserOutput,
        CreateUser,
        UpdateUser,
        UpdatePassword,
        SearchResult<UserOutput>,
        SortDirection,
        ErrorResponse,
        InternalErrorResponse,
    )),
    tags(
        (name = "Users", description = "User account management")
    )
)]
pub struct ApiDoc;

/// OpenAPI documentation for Auth API
#[derive(OpenApi)]
#[openapi(
    paths(login),
    components(schemas(LoginRequest, AccessToken, ErrorResponse)),
    tags(
        (name = "Authentication", description = "Email/password login")
    )
)]
pub struct AuthApiDoc;

type SharedUseCases<R> = State<Arc<UserUseCases<R>>>;

/// Create the users router with all HTTP endpoints
pub fn router<R: UserRepository + 'static>(use_cases: UserUseCases<R>) -> Router {
    Router::new()
        .route("/", get(search_users).post(create_user))
        .route("/{id}", get(get_user).put(update_user).delete(delete_user))
        .route("/{id}/password", patch(update_password))
        .with_state(Arc::new(use_cases))
}

/// Create the auth router (`/login`)
pub fn auth_router<R: UserRepository + 'static>(use_case: AuthenticateUserUseCase<R>) -> Router {
    Router::new()
        .route("/login", post(login))
        .with_state(Arc::new(use_case))
}

/// Search users with filtering, sorting and pagination
#[utoipa::path(
    get,
    path = "",
    tag = "Users",
    params(SearchParams),
    responses(
        (status = 200, description = "One page of users", body = SearchResult<UserOutput>),
        (status = 400, description = "Malformed query string", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = InternalErrorResponse)
    )
)]
async fn search_users<R: UserRepository>(
    State(use_cases): SharedUseCases<R>,
    QueryParams(params): QueryParams<SearchParams>,
) -> UserResult<Json<SearchResult<UserOutput>>> {
    Ok(Json(use_cases.search.execute(params).await?))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created successfully", body = UserOutput),
        (status = 400, description = "Invalid input or email already used", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = InternalErrorResponse)
    )
)]
async fn create_user<R: UserRepository>(
    State(use_cases): SharedUseCases<R>,
    ValidatedJson(input): ValidatedJson<CreateUser>,
) -> UserResult<impl IntoResponse> {
    let user = use_cases.create.execute(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserOutput),
        (status = 400, description = "Malformed ID or user not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = InternalErrorResponse)
    )
)]
async fn get_user<R: UserRepository>(
    State(use_cases): SharedUseCases<R>,
    UuidPath(id): UuidPath,
) -> UserResult<Json<UserOutput>> {
    Ok(Json(use_cases.get.execute(id).await?))
}

/// Update a user's name, email or avatar
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated successfully", body = UserOutput),
        (status = 400, description = "Invalid input, conflict or user not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = InternalErrorResponse)
    )
)]
async fn update_user<R: UserRepository>(
    State(use_cases): SharedUseCases<R>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateUser>,
) -> UserResult<Json<UserOutput>> {
    Ok(Json(use_cases.update.execute(id, input).await?))
}

/// Change a user's password
#[utoipa::path(
    patch,
    path = "/{id}/password",
    tag = "Users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = UpdatePassword,
    responses(
        (status = 200, description = "Password changed", body = UserOutput),
        (status = 400, description = "Old password does not match or user not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = InternalErrorResponse)
    )
)]
async fn update_password<R: UserRepository>(
    State(use_cases): SharedUseCases<R>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdatePassword>,
) -> UserResult<Json<UserOutput>> {
    Ok(Json(use_cases.update_password.execute(id, input).await?))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted successfully"),
        (status = 400, description = "Malformed ID or user not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = InternalErrorResponse)
    )
)]
async fn delete_user<R: UserRepository>(
    State(use_cases): SharedUseCases<R>,
    UuidPath(id): UuidPath,
) -> UserResult<StatusCode> {
    use_cases.delete.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Login with email/password
#[utoipa::path(
    post,
    path = "/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "The user was successfully authenticated", body = AccessToken),
        (status = 400, description = "Missing or invalid fields", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    )
)]
async fn login<R: UserRepository>(
    State(use_case): State<Arc<AuthenticateUserUseCase<R>>>,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> UserResult<Json<AccessToken>> {
    Ok(Json(use_case.execute(input).await?))
}
