//! Response models shared across route groups.
//!
//! `LessonResponse` is the API-facing shape of a lesson row; both the
//! lessons group and the search endpoint return it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LessonResponse {
    pub id: i64,
    pub subject: String,
    pub location: String,
    pub price: i32,
    pub spaces: i32,
    pub image: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<db::models::lesson::Model> for LessonResponse {
    fn from(lesson: db::models::lesson::Model) -> Self {
        Self {
            id: lesson.id,
            subject: lesson.subject,
            location: lesson.location,
            price: lesson.price,
            spaces: lesson.spaces,
            image: lesson.image,
            created_at: lesson.created_at.to_rfc3339(),
            updated_at: lesson.updated_at.to_rfc3339(),
        }
    }
}
