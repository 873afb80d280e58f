use std::sync::Arc;

use axum::Router;
use axum_helpers::JwtAuth;
use domain_products::{
    InMemoryProductRepository, PgProductRepository, ProductRepository, ProductUseCases,
};
use domain_users::{
    AuthenticateUserUseCase, InMemoryUserRepository, PgUserRepository, UserRepository,
    UserUseCases,
};

use crate::state::{AppState, Storage};

pub mod health;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix will be added by the `create_router` helper.
///
/// Each domain gets its repository for the selected storage; users and auth
/// share one user repository.
pub fn routes(state: &AppState) -> Router {
    match &state.storage {
        Storage::Memory => compose(
            Arc::new(InMemoryProductRepository::new()),
            Arc::new(InMemoryUserRepository::new()),
            state.jwt_auth.clone(),
        ),
        Storage::Postgres(db) => compose(
            Arc::new(PgProductRepository::new(db.clone())),
            Arc::new(PgUserRepository::new(db.clone())),
            state.jwt_auth.clone(),
        ),
    }
}

fn compose<P, U>(products: Arc<P>, users: Arc<U>, jwt_auth: JwtAuth) -> Router
where
    P: ProductRepository + 'static,
    U: UserRepository + 'static,
{
    Router::new()
        .nest(
            "/products",
            domain_products::handlers::router(ProductUseCases::new(products)),
        )
        .nest(
            "/users",
            domain_users::handlers::router(UserUseCases::new(Arc::clone(&users))),
        )
        .nest(
            "/auth",
            domain_users::handlers::auth_router(AuthenticateUserUseCase::new(users, jwt_auth)),
        )
}

/// Creates a router with the /ready endpoint that performs actual health checks.
pub fn ready_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment, StorageBackend};
    use crate::openapi::ApiDoc;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum_helpers::AppInfo;
    use core_config::{JwtConfig, server::ServerConfig};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn memory_state() -> AppState {
        let config = Config {
            app: AppInfo::new("shop_api", "0.1.0"),
            environment: Environment::Development,
            server: ServerConfig::default(),
            jwt: JwtConfig::new("api-test-secret", 3600),
            storage: StorageBackend::Memory,
            database: None,
        };
        AppState::new(config, Storage::Memory)
    }

    fn app() -> Router {
        let state = memory_state();
        axum_helpers::create_router::<ApiDoc>(routes(&state), &state.config.server)
            .unwrap()
            .merge(ready_router(state))
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    #[tokio::test]
    async fn test_products_are_served_under_api_prefix() {
        let app = app();

        let (status, created) = send(
            &app,
            "POST",
            "/api/products",
            Some(json!({ "name": "Product 1", "price": 10.0, "quantity": 3 })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, fetched) =
            send(&app, "GET", &format!("/api/products/{}", created["id"].as_str().unwrap()), None)
                .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);

        let (status, page) = send(&app, "GET", "/api/products?filter=product", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(page["total"], 1);
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let app = app();

        let (status, _) = send(
            &app,
            "POST",
            "/api/users",
            Some(json!({ "name": "Sample", "email": "sample@mail.com", "password": "123456" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = send(
            &app,
            "POST",
            "/api/auth/login",
            Some(json!({ "email": "sample@mail.com", "password": "123456" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["access_token"].is_string());
    }

    #[tokio::test]
    async fn test_ready_with_memory_storage() {
        let (status, body) = send(&app(), "GET", "/ready", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ready");
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let (status, _) = send(&app(), "GET", "/api/orders", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
