#![cfg(test)]
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<()> = OnceCell::const_new();

/// Fresh connection for the current test's runtime. `None` when `SKIP_DB_TESTS`
/// is set or the database cannot be reached.
pub async fn get_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let db = match models::db::connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skipping db test: {e}");
            return None;
        }
    };
    let migrated = MIGRATED
        .get_or_try_init(|| async { migration::Migrator::up(&db, None).await })
        .await;
    if let Err(e) = migrated {
        eprintln!("skipping db test, migrations failed: {e}");
        return None;
    }
    Some(db)
}
