//! Migrate command - Database schema management.

use sea_orm::DbErr;

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // Connect without auto-running migrations for manual control
    let db = Database::connect_without_migrations(&config)
        .await
        .map_err(|e| migration_error("connect", e))?;

    match args.action {
        MigrateAction::Up => {
            db.run_migrations()
                .await
                .map_err(|e| migration_error("up", e))?;
            tracing::info!("Catalog schema is up to date");
        }
        MigrateAction::Down => {
            db.rollback_migration()
                .await
                .map_err(|e| migration_error("down", e))?;
            tracing::info!("Rolled back the latest migration");
        }
        MigrateAction::Status => {
            let status = db
                .migration_status()
                .await
                .map_err(|e| migration_error("status", e))?;

            let pending = status.iter().filter(|(_, applied)| !applied).count();
            for (name, applied) in &status {
                println!("[{}] {}", if *applied { "x" } else { " " }, name);
            }
            tracing::info!(total = status.len(), pending, "Migration status");
        }
        MigrateAction::Fresh => {
            tracing::warn!("Dropping all tables, every user, book and favorite will be lost");
            db.fresh_migrations()
                .await
                .map_err(|e| migration_error("fresh", e))?;
            tracing::info!("Schema recreated from scratch");
        }
    }

    Ok(())
}

fn migration_error(step: &str, e: DbErr) -> AppError {
    AppError::internal(format!("migrate {} failed: {}", step, e))
}
