//! # Axum Helpers
//!
//! Shared HTTP plumbing for the shop services.
//!
//! - **[`errors`]**: [`AppError`], the single translation point from
//!   domain failures to HTTP responses
//! - **[`extractors`]**: UUID path, query string and validated JSON extractors
//! - **[`auth`]**: HS256 access tokens
//! - **[`server`]**: router assembly, health endpoints, graceful shutdown
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router, AppInfo};
//!
//! let router = create_router::<ApiDoc>(api_routes, &config.server)?
//!     .merge(health_router(AppInfo::new("shop_api", env!("CARGO_PKG_VERSION"))));
//! create_production_app(router, &config.server, Duration::from_secs(30), async {}).await?;
//! ```

pub mod auth;
pub mod errors;
pub mod extractors;
pub mod server;

pub use auth::{JwtAuth, JwtClaims};
pub use errors::{AppError, ErrorResponse, InternalErrorResponse};
pub use extractors::{QueryParams, UuidPath, ValidatedJson};
pub use server::{
    AppInfo, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks, shutdown_signal,
};
