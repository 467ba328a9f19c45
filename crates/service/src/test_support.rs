#![cfg(test)]
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::db::connect_in_memory;

/// Fresh migrated database per test; nothing is shared between tests.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = connect_in_memory().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
