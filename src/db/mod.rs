use sea_orm::{Database, DatabaseConnection, EntityTrait, PaginatorTrait};

use crate::config::Config;
use crate::data;
use crate::entities::hotel;
use crate::error::{AppError, AppResult};

pub async fn connect(config: &Config) -> AppResult<DatabaseConnection> {
    Database::connect(&config.database_url)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to connect to database: {}", e)))
}

/// Seed the hotel catalog into an empty database. Existing rows are left
/// untouched, so restarting the server never duplicates the catalog.
pub async fn seed_hotels(db: &DatabaseConnection) -> AppResult<()> {
    let existing = hotel::Entity::find().count(db).await?;
    if existing > 0 {
        return Ok(());
    }

    hotel::Entity::insert_many(data::hotels::catalog())
        .exec(db)
        .await?;
    tracing::info!("Hotel catalog seeded");

    Ok(())
}
