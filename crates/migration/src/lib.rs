//! Migrator registering one migration per table, then indexes.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_user;
mod m20240101_000002_create_category;
mod m20240101_000003_create_qa;
mod m20240101_000004_create_document;
mod m20240101_000005_create_attachment;
mod m20240101_000006_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_user::Migration),
            Box::new(m20240101_000002_create_category::Migration),
            Box::new(m20240101_000003_create_qa::Migration),
            Box::new(m20240101_000004_create_document::Migration),
            Box::new(m20240101_000005_create_attachment::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000006_add_indexes::Migration),
        ]
    }
}
