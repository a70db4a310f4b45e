use crate::seed::{Seeder, run_seeder};
use crate::seeds::lesson::LessonSeeder;
use migration::Migrator;
use sea_orm_migration::MigratorTrait;

mod seed;
mod seeds;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let db = db::connect().await;

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    for (seeder, name) in [(Box::new(LessonSeeder) as Box<dyn Seeder + Send + Sync>, "Lesson")] {
        run_seeder(&*seeder, name, &db).await;
    }
}
