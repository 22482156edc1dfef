//! Persistence gateway owning the database connection pool.
//!
//! The gateway is constructed explicitly at startup and shared through `AppState`.
//! Handlers ask it for a connection on every request, so a gateway that never connected
//! (no `DATABASE_URL`) answers with `AppError::DatabaseNotReady` instead of panicking.

use std::{sync::Arc, time::Duration};

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tokio::sync::RwLock;

use crate::server::{config::Config, error::AppError};

const MAX_CONNECTIONS: u32 = 10;
const IDLE_TIMEOUT: Duration = Duration::from_secs(20);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct DatabaseGateway {
    url: Option<String>,
    connection: Arc<RwLock<Option<DatabaseConnection>>>,
}

impl DatabaseGateway {
    pub fn new(config: &Config) -> Self {
        Self {
            url: config.database_url.clone(),
            connection: Arc::new(RwLock::new(None)),
        }
    }

    /// Wraps an already established connection, such as a test database.
    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self {
            url: None,
            connection: Arc::new(RwLock::new(Some(db))),
        }
    }

    /// Opens the connection pool and runs pending migrations.
    ///
    /// Calling `connect` on a connected gateway does nothing. Without a configured URL
    /// a warning is logged and the gateway stays not ready.
    ///
    /// # Returns
    /// - `Ok(())` - Connected, already connected, or no URL configured
    /// - `Err(AppError::DbErr)` - Failed to connect or to apply migrations
    pub async fn connect(&self) -> Result<(), AppError> {
        let mut connection = self.connection.write().await;

        if connection.is_some() {
            tracing::debug!("Database already connected");
            return Ok(());
        }

        let Some(url) = &self.url else {
            tracing::warn!("DATABASE_URL is not set, running without a database");
            return Ok(());
        };

        let mut opt = ConnectOptions::new(url.as_str());
        opt.max_connections(MAX_CONNECTIONS)
            .idle_timeout(IDLE_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .sqlx_logging(false);

        let db = Database::connect(opt)
            .await
            .inspect_err(|e| tracing::error!("Failed to connect to database: {}", e))?;

        Migrator::up(&db, None).await?;

        tracing::info!("Database connection established");
        *connection = Some(db);

        Ok(())
    }

    /// Closes the pool. Safe to call when not connected.
    pub async fn disconnect(&self) -> Result<(), AppError> {
        let db = self.connection.write().await.take();

        if let Some(db) = db {
            db.close().await?;
            tracing::info!("Database connection closed");
        }

        Ok(())
    }

    /// Gets a handle to the pool.
    ///
    /// # Returns
    /// - `Ok(DatabaseConnection)` - Handle sharing the gateway's pool
    /// - `Err(AppError::DatabaseNotReady)` - `connect` has not succeeded
    pub async fn connection(&self) -> Result<DatabaseConnection, AppError> {
        self.connection
            .read()
            .await
            .clone()
            .ok_or(AppError::DatabaseNotReady)
    }

    pub async fn is_ready(&self) -> bool {
        self.connection.read().await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{EntityTrait, PaginatorTrait};

    fn config(database_url: Option<&str>) -> Config {
        Config::from_lookup(|key| match key {
            "APP_ENV" => Some("test".to_string()),
            "DATABASE_URL" => database_url.map(str::to_string),
            _ => None,
        })
        .unwrap()
    }

    /// Expected: gateway stays not ready and refuses to hand out connections
    #[tokio::test]
    async fn stays_not_ready_without_url() {
        let gateway = DatabaseGateway::new(&config(None));

        gateway.connect().await.unwrap();

        assert!(!gateway.is_ready().await);
        assert!(matches!(
            gateway.connection().await,
            Err(AppError::DatabaseNotReady)
        ));
    }

    /// Expected: connect applies migrations, is idempotent, and disconnect resets readiness
    #[tokio::test]
    async fn connects_migrates_and_disconnects() {
        let path = std::env::temp_dir().join(format!(
            "venturelens-gateway-{}-{}.db",
            std::process::id(),
            chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        let url = format!("sqlite://{}?mode=rwc", path.display());
        let gateway = DatabaseGateway::new(&config(Some(&url)));

        gateway.connect().await.unwrap();
        gateway.connect().await.unwrap();
        assert!(gateway.is_ready().await);

        let db = gateway.connection().await.unwrap();
        let users = entity::prelude::User::find().count(&db).await.unwrap();
        assert_eq!(users, 0);

        gateway.disconnect().await.unwrap();
        gateway.disconnect().await.unwrap();
        assert!(!gateway.is_ready().await);

        let _ = std::fs::remove_file(path);
    }
}
