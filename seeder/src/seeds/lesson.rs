use crate::seed::Seeder;
use db::seeders::lesson_seeder;
use sea_orm::{DatabaseConnection, DbErr};
use std::pin::Pin;

/// Seeds the fixed ten-lesson catalogue, skipping if lessons already exist.
pub struct LessonSeeder;

impl Seeder for LessonSeeder {
    fn seed<'a>(
        &'a self,
        db: &'a DatabaseConnection,
    ) -> Pin<Box<dyn Future<Output = Result<(), DbErr>> + Send + 'a>> {
        Box::pin(async move {
            lesson_seeder::seed_if_empty(db).await?;
            Ok(())
        })
    }
}
