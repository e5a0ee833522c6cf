use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use crate::config::Settings;
use crate::errors::InternalError;

/// Establish the application database connection
///
/// Does NOT run migrations - call `migrate_database()` separately.
pub async fn init_database(settings: &Settings) -> Result<DatabaseConnection, InternalError> {
    let db = Database::connect(&settings.database_url)
        .await
        .map_err(|e| InternalError::database("connect_database", e))?;

    tracing::debug!("Connected to database: {}", settings.database_url);

    Ok(db)
}

/// Run all pending migrations against the connected database
pub async fn migrate_database(db: &DatabaseConnection) -> Result<(), InternalError> {
    Migrator::up(db, None)
        .await
        .map_err(|e| InternalError::database("migrate_database", e))?;

    tracing::debug!("Database migrations completed");

    Ok(())
}
