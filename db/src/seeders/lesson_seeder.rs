use crate::models::lesson::{Entity as LessonEntity, Model as Lesson};
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, PaginatorTrait};

/// The fixed lesson catalogue: (subject, location, price, spaces, image).
pub const SEED_LESSONS: [(&str, &str, i32, i32, &str); 10] = [
    ("Math", "London", 100, 5, "math.png"),
    ("English", "Bristol", 80, 5, "english.png"),
    ("Science", "Oxford", 90, 5, "science.png"),
    ("Art", "York", 50, 5, "art.png"),
    ("Music", "Manchester", 70, 5, "music.png"),
    ("Drama", "Leeds", 60, 5, "drama.png"),
    ("Coding", "Cambridge", 120, 5, "coding.png"),
    ("Chess", "Brighton", 40, 5, "chess.png"),
    ("Robotics", "Liverpool", 110, 5, "robotics.png"),
    ("Swimming", "Cardiff", 95, 5, "swimming.png"),
];

/// Inserts the fixed lesson catalogue.
pub async fn seed<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    for (subject, location, price, spaces, image) in SEED_LESSONS {
        Lesson::create(db, subject, location, price, spaces, image).await?;
    }
    Ok(())
}

/// First-startup seeding: inserts the catalogue only when the lessons table
/// is empty, so restarts never duplicate or reset stock.
pub async fn seed_if_empty<C: ConnectionTrait>(db: &C) -> Result<bool, DbErr> {
    let existing = LessonEntity::find().count(db).await?;
    if existing > 0 {
        return Ok(false);
    }

    tracing::info!("Lessons table empty, seeding {} lessons", SEED_LESSONS.len());
    seed(db).await?;
    Ok(true)
}
