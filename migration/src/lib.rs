pub use sea_orm_migration::prelude::*;

mod m20250810_000001_create_users_table;
mod m20250810_000002_create_verifications_table;
mod m20250810_000003_create_workspaces_tables;
mod m20250810_000004_create_projects_table;
mod m20250810_000005_create_tasks_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250810_000001_create_users_table::Migration),
            Box::new(m20250810_000002_create_verifications_table::Migration),
            Box::new(m20250810_000003_create_workspaces_tables::Migration),
            Box::new(m20250810_000004_create_projects_table::Migration),
            Box::new(m20250810_000005_create_tasks_tables::Migration),
        ]
    }
}
