//! Order response models.
//!
//! Booked lesson lines are returned both from order placement and from the
//! order listing, so they live here.

use serde::Serialize;

/// One booked lesson line, as captured at order time.
#[derive(Debug, Default, Serialize)]
pub struct BookedLessonResponse {
    pub lesson_id: i64,
    pub subject: String,
    pub location: String,
    pub price: i32,
}

impl From<db::models::order_lesson::Model> for BookedLessonResponse {
    fn from(line: db::models::order_lesson::Model) -> Self {
        Self {
            lesson_id: line.lesson_id,
            subject: line.subject,
            location: line.location,
            price: line.price,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub id: i64,
    pub customer_name: String,
    pub phone: String,
    pub created_at: String,
    pub lessons: Vec<BookedLessonResponse>,
}
