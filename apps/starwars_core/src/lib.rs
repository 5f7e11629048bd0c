pub mod errors;
pub mod extract;
pub mod models;
pub mod password;
pub mod serializers;
pub mod store;
pub mod urls;
pub mod views;

use anyhow::Result;
use axum::Router;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tower_http::{cors::CorsLayer, normalize_path::NormalizePath, trace::TraceLayer};
use tracing::info;

use crate::store::Store;

/// Local file-backed database used when `DATABASE_URL` is unset.
pub const DEV_DATABASE_URL: &str = "sqlite:///tmp/test.db?mode=rwc";

#[derive(Clone, Debug)]
pub struct Settings {
    /// Listening port (default 3000). Override with PORT.
    pub port: u16,
    /// Connection string. Override with DATABASE_URL.
    pub database_url: String,
    /// Pool size (default 10). Override with DB_MAX_CONNECTIONS.
    pub db_max_connections: u32,
    /// Log every SQL statement. Enable with SQL_LOG=1.
    pub sql_log: bool,
}

impl Settings {
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);
        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEV_DATABASE_URL.into());
        let db_max_connections = std::env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10);
        let sql_log = std::env::var("SQL_LOG")
            .map(|v| matches!(v.as_str(), "1" | "true" | "TRUE"))
            .unwrap_or(false);

        Self {
            port,
            database_url,
            db_max_connections,
            sql_log,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            store: Store::new(db),
        }
    }
}

pub async fn connect(settings: &Settings) -> Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(settings.database_url.clone());
    opts.max_connections(settings.db_max_connections)
        .sqlx_logging(settings.sql_log);
    let db = Database::connect(opts).await?;
    info!(backend = ?db.get_database_backend(), "connected to store");
    Ok(db)
}

/// Ensure DB schema is up-to-date (calls migration crate).
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<()> {
    use migration::Migrator;
    use sea_orm_migration::migrator::MigratorTrait;
    Migrator::up(db, None).await?;
    Ok(())
}

/// The full HTTP stack: routes, tracing, permissive CORS, and trailing
/// slash trimming in front of routing.
pub fn app(state: AppState) -> NormalizePath<Router> {
    let router = urls::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());
    NormalizePath::trim_trailing_slash(router)
}
