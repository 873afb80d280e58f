use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse, axum_helpers::InternalErrorResponse)
    ),
    info(
        title = "Shop API",
        version = "0.1.0",
        description = "Products, users and authentication"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/products", api = domain_products::ApiDoc),
        (path = "/users", api = domain_users::ApiDoc),
        (path = "/auth", api = domain_users::AuthApiDoc)
    )
)]
pub struct ApiDoc;
