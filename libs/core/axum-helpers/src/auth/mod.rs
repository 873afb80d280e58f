//! Stateless HS256 access tokens.

pub mod jwt;

pub use jwt::{JwtAuth, JwtClaims};
