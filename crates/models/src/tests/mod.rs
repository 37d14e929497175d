use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

use crate::db::connect;

/// CRUD operations for every entity
pub mod crud_tests;


static MIGRATED: OnceCell<()> = OnceCell::const_new();

/// Connect and migrate once per test binary. `None` when `SKIP_DB_TESTS` is set
/// or no database is reachable.
pub async fn setup_test_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let db = match connect().await {
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
