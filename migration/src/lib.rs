pub use sea_orm_migration::prelude::*;

mod m20260810_000001_create_portfolios_table;
mod m20260810_000002_create_classes_table;
mod m20260810_000003_create_class_schedules_table;
mod m20260810_000004_create_orders_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260810_000001_create_portfolios_table::Migration),
            Box::new(m20260810_000002_create_classes_table::Migration),
            Box::new(m20260810_000003_create_class_schedules_table::Migration),
            Box::new(m20260810_000004_create_orders_table::Migration),
        ]
    }
}
