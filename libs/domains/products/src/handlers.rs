//! HTTP handlers for Products API

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    ErrorResponse, InternalErrorResponse, QueryParams, UuidPath, ValidatedJson,
};
use database::{SearchParams, SearchResult, SortDirection};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::models::{CreateProduct, ProductOutput, UpdateProduct};
use crate::repository::ProductRepository;
use crate::usecases::ProductUseCases;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        search_products,
        create_product,
        get_product,
        update_product,
        delete_product,
    ),
    components(schemas(
        ProductOutput,
        CreateProduct,
        UpdateProduct,
        SearchResult<ProductOutput>,
        SortDirection,
        ErrorResponse,
        InternalErrorResponse,
    )),
    tags(
        (name = "Products", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

type SharedUseCases<R> = State<Arc<ProductUseCases<R>>>;

/// Create the products router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(use_cases: ProductUseCases<R>) -> Router {
    Router::new()
        .route("/", get(search_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(Arc::new(use_cases))
}

/// Search products with filtering, sorting and pagination
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(SearchParams),
    responses(
        (status = 200, description = "One page of products", body = SearchResult<ProductOutput>),
        (status = 400, description = "Malformed query string", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = InternalErrorResponse)
    )
)]
async fn search_products<R: ProductRepository>(
    State(use_cases): SharedUseCases<R>,
    QueryParams(params): QueryParams<SearchParams>,
) -> ProductResult<Json<SearchResult<ProductOutput>>> {
    Ok(Json(use_cases.search.execute(params).await?))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created successfully", body = ProductOutput),
        (status = 400, description = "Invalid input or name already used", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = InternalErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(use_cases): SharedUseCases<R>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> ProductResult<impl IntoResponse> {
    let product = use_cases.create.execute(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ProductOutput),
        (status = 400, description = "Malformed ID or product not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = InternalErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(use_cases): SharedUseCases<R>,
    UuidPath(id): UuidPath,
) -> ProductResult<Json<ProductOutput>> {
    Ok(Json(use_cases.get.execute(id).await?))
}

/// Update a product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated successfully", body = ProductOutput),
        (status = 400, description = "Invalid input, conflict or product not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = InternalErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(use_cases): SharedUseCases<R>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateProduct>,
) -> ProductResult<Json<ProductOutput>> {
    Ok(Json(use_cases.update.execute(id, input).await?))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted successfully"),
        (status = 400, description = "Malformed ID or product not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = InternalErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(use_cases): SharedUseCases<R>,
    UuidPath(id): UuidPath,
) -> ProductResult<StatusCode> {
    use_cases.delete.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
