//! Lesson retrieval routes.
//!
//! Provides `GET /lessons` (the full catalogue, natural storage order) and
//! `GET /lessons/{lesson_id}`. Responses follow the standard `ApiResponse`
//! format.

use axum::{Json, extract::Path, extract::State, http::StatusCode, response::IntoResponse};
use db::models::lesson::Model as Lesson;
use util::state::AppState;

use crate::response::ApiResponse;
use crate::routes::common::LessonResponse;

/// GET /lessons
///
/// Returns every lesson document unmodified. No pagination, filtering, or
/// ordering guarantee beyond natural storage order.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": [
///     { "id": 1, "subject": "Math", "location": "London", "price": 100, "spaces": 5, "image": "math.png", ... }
///   ],
///   "message": "Lessons retrieved successfully"
/// }
/// ```
///
/// - `500 Internal Server Error`
pub async fn get_lessons(State(app_state): State<AppState>) -> impl IntoResponse {
    match Lesson::get_all(app_state.db()).await {
        Ok(lessons) => {
            let data: Vec<LessonResponse> = lessons.into_iter().map(LessonResponse::from).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(data, "Lessons retrieved successfully")),
            )
        }
        Err(e) => {
            tracing::error!("Failed to list lessons: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Vec<LessonResponse>>::error("Database error")),
            )
        }
    }
}

/// GET /lessons/{lesson_id}
///
/// Returns a single lesson by its ID.
///
/// ### Responses
/// - `200 OK` with the lesson in `data`
/// - `404 Not Found` if no lesson has the given ID
/// - `500 Internal Server Error`
pub async fn get_lesson(
    State(app_state): State<AppState>,
    Path(lesson_id): Path<i64>,
) -> impl IntoResponse {
    match Lesson::get_by_id(app_state.db(), lesson_id).await {
        Ok(Some(lesson)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                LessonResponse::from(lesson),
                "Lesson retrieved successfully",
            )),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<LessonResponse>::error("Lesson not found")),
        ),
        Err(e) => {
            tracing::error!("Failed to fetch lesson {lesson_id}: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<LessonResponse>::error("Database error")),
            )
        }
    }
}
