use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202608080001_create_lessons::Migration),
            Box::new(migrations::m202608080002_create_orders::Migration),
            Box::new(migrations::m202608080003_create_order_lessons::Migration),
        ]
    }
}
