//! Lesson update routes.
//!
//! Provides `PUT /lessons/{lesson_id}` for partial updates of lesson
//! attributes. Responses follow the standard `ApiResponse` format.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue::Set};
use serde::{Deserialize, Serialize};

use db::models::lesson::{ActiveModel as LessonActiveModel, Model as Lesson};
use util::state::AppState;

use crate::response::ApiResponse;
use crate::routes::common::LessonResponse;

/// Any subset of the updatable lesson attributes. Fields that are absent
/// from the request body are left untouched.
#[derive(Debug, Deserialize)]
pub struct EditLessonRequest {
    pub subject: Option<String>,
    pub location: Option<String>,
    pub price: Option<i32>,
    pub spaces: Option<i32>,
}

#[derive(Debug, Default, Serialize)]
pub struct EditLessonResponse {
    pub updated_fields: Vec<String>,
    pub lesson: LessonResponse,
}

/// PUT /lessons/{lesson_id}
///
/// Applies a partial update to a lesson. The update contains exactly the
/// fields present in the request body; an update with no recognized fields
/// is rejected. Values are applied verbatim, without bounds checks.
///
/// ### Request Body
/// ```json
/// { "spaces": 2 }
/// ```
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "updated_fields": ["spaces"],
///     "lesson": { "id": 1, "subject": "Math", "spaces": 2, ... }
///   },
///   "message": "Lesson updated successfully"
/// }
/// ```
///
/// - `400 Bad Request` (missing/malformed body, or no updatable field present)
/// - `404 Not Found` (no lesson with the given ID)
/// - `500 Internal Server Error`
pub async fn edit_lesson(
    State(app_state): State<AppState>,
    Path(lesson_id): Path<i64>,
    payload: Result<Json<EditLessonRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Ok(Json(req)) = payload else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<EditLessonResponse>::error(
                "Request body must be a JSON object",
            )),
        );
    };

    let mut updated_fields: Vec<String> = Vec::new();
    let mut lesson = LessonActiveModel {
        id: Set(lesson_id),
        ..Default::default()
    };

    if let Some(subject) = req.subject {
        lesson.subject = Set(subject);
        updated_fields.push("subject".into());
    }
    if let Some(location) = req.location {
        lesson.location = Set(location);
        updated_fields.push("location".into());
    }
    if let Some(price) = req.price {
        lesson.price = Set(price);
        updated_fields.push("price".into());
    }
    if let Some(spaces) = req.spaces {
        lesson.spaces = Set(spaces);
        updated_fields.push("spaces".into());
    }

    if updated_fields.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<EditLessonResponse>::error(
                "No updatable fields provided",
            )),
        );
    }

    // Check the lesson exists before updating, so a missing row is a 404
    // rather than a failed update.
    match Lesson::get_by_id(app_state.db(), lesson_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<EditLessonResponse>::error("Lesson not found")),
            );
        }
        Err(e) => {
            tracing::error!("Failed to fetch lesson {lesson_id}: {e}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<EditLessonResponse>::error("Database error")),
            );
        }
    }

    lesson.updated_at = Set(Utc::now());

    match lesson.update(app_state.db()).await {
        Ok(updated) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                EditLessonResponse {
                    updated_fields,
                    lesson: LessonResponse::from(updated),
                },
                "Lesson updated successfully",
            )),
        ),
        Err(e) => {
            tracing::error!("Failed to update lesson {lesson_id}: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<EditLessonResponse>::error("Database error")),
            )
        }
    }
}
