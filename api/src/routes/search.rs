//! Lesson search route.
//!
//! A single free-text query parameter drives two independent lookups: a
//! case-insensitive substring match over the text fields, and an exact
//! match over the numeric fields when the query parses as an integer. The
//! two result sets are unioned and deduplicated by lesson id.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use std::collections::HashSet;

use db::models::lesson::Model as Lesson;
use util::state::AppState;

use crate::response::ApiResponse;
use crate::routes::common::LessonResponse;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// GET /search?q=
///
/// Searches lessons by subject, location, price or remaining spaces. A
/// non-numeric query matches no numeric field; an empty query substring-
/// matches every lesson. No ranking or pagination.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": [ { "id": 1, "subject": "Math", ... } ],
///   "message": "Search completed successfully"
/// }
/// ```
///
/// - `400 Bad Request` (missing `q` parameter)
/// - `500 Internal Server Error`
pub async fn search_lessons(
    State(app_state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> impl IntoResponse {
    let Some(q) = params.q else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<Vec<LessonResponse>>::error(
                "Missing search query parameter 'q'",
            )),
        );
    };

    let mut matches = match Lesson::find_matching_text(app_state.db(), &q).await {
        Ok(lessons) => lessons,
        Err(e) => {
            tracing::error!("Text search failed for {q:?}: {e}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Vec<LessonResponse>>::error("Database error")),
            );
        }
    };

    if let Ok(n) = q.trim().parse::<i32>() {
        match Lesson::find_matching_number(app_state.db(), n).await {
            Ok(lessons) => matches.extend(lessons),
            Err(e) => {
                tracing::error!("Numeric search failed for {n}: {e}");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::<Vec<LessonResponse>>::error("Database error")),
                );
            }
        }
    }

    // Union of the two queries, first occurrence wins.
    let mut seen: HashSet<i64> = HashSet::new();
    matches.retain(|lesson| seen.insert(lesson.id));

    let data: Vec<LessonResponse> = matches.into_iter().map(LessonResponse::from).collect();
    (
        StatusCode::OK,
        Json(ApiResponse::success(data, "Search completed successfully")),
    )
}
