pub use sea_orm_migration::prelude::*;

mod m20250304_105428_create_users_table;
mod m20260301_090000_create_table_societies;
mod m20260301_090100_create_table_society_requests;
mod m20260301_090200_create_table_groups;
mod m20260301_090300_create_table_society_user_roles;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250304_105428_create_users_table::Migration),
            Box::new(m20260301_090000_create_table_societies::Migration),
            Box::new(m20260301_090100_create_table_society_requests::Migration),
            Box::new(m20260301_090200_create_table_groups::Migration),
            Box::new(m20260301_090300_create_table_society_user_roles::Migration),
        ]
    }
}
