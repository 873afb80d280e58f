//! PostgreSQL connection management, migrations, health checks and query
//! helpers shared by the SeaORM repositories.

mod config;
mod connector;
mod health;
mod query;

pub use config::PostgresConfig;
pub use connector::{connect, connect_from_config, run_migrations};
pub use health::check_health;
pub use query::{collated_text, contains_pattern};

pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
pub use sea_orm_migration::MigratorTrait;
