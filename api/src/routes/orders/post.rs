//! Order placement routes.
//!
//! Provides the `POST /orders` endpoint. Validation is fail-fast: the first
//! failed check decides the response. The availability check and the space
//! decrement are one conditional update per booked line, all inside a single
//! transaction, so an order either books every requested line or nothing.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::TransactionTrait;
use serde::{Deserialize, Serialize};

use common::validation::{is_valid_customer_name, is_valid_phone};
use db::models::{
    lesson::Model as Lesson, order::Model as Order, order_lesson::Model as OrderLesson,
};
use util::state::AppState;

use crate::response::ApiResponse;
use crate::routes::orders::common::BookedLessonResponse;

/// Order input. All three fields are required; they are optional here so a
/// missing field produces a named 400 instead of a deserialization error.
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    #[serde(alias = "lessonIds")]
    pub lesson_ids: Option<Vec<i64>>,
}

#[derive(Debug, Default, Serialize)]
pub struct CreateOrderResponse {
    pub order_id: i64,
    pub lessons: Vec<BookedLessonResponse>,
}

/// POST /orders
///
/// Places an order against lesson inventory.
///
/// ### Request Body
/// ```json
/// {
///   "name": "Jane Doe",
///   "phone": "0123456789",
///   "lesson_ids": [1, 2]
/// }
/// ```
///
/// ### Validation Rules (first failure wins)
/// 1. all three fields present and well-typed
/// 2. `lesson_ids` non-empty
/// 3. `name` is letters and spaces only; `phone` is digits only
/// 4. every referenced lesson exists (`404` otherwise) and has at least one
///    remaining space (`400` otherwise)
///
/// A duplicate lesson id books one space per occurrence.
///
/// ### Responses
///
/// - `201 Created`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "order_id": 7,
///     "lessons": [
///       { "lesson_id": 1, "subject": "Math", "location": "London", "price": 100 }
///     ]
///   },
///   "message": "Order placed successfully"
/// }
/// ```
///
/// - `400 Bad Request` (validation failure, including a full lesson)
/// - `404 Not Found` (a referenced lesson does not exist)
/// - `500 Internal Server Error`
pub async fn place_order(
    State(app_state): State<AppState>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Ok(Json(req)) = payload else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<CreateOrderResponse>::error(
                "Request body must be a JSON object with name, phone and lesson_ids",
            )),
        );
    };

    let Some(name) = req.name else {
        return bad_request("name is required");
    };
    let Some(phone) = req.phone else {
        return bad_request("phone is required");
    };
    let Some(lesson_ids) = req.lesson_ids else {
        return bad_request("lesson_ids is required");
    };

    if lesson_ids.is_empty() {
        return bad_request("lesson_ids must not be empty");
    }
    if !is_valid_customer_name(&name) {
        return bad_request("Name must contain only letters and spaces");
    }
    if !is_valid_phone(&phone) {
        return bad_request("Phone must contain only digits");
    }

    let txn = match app_state.db().begin().await {
        Ok(txn) => txn,
        Err(e) => {
            tracing::error!("Failed to open transaction: {e}");
            return server_error();
        }
    };

    // Every line must both exist and still have a space; the first failure
    // rolls the whole order back.
    let mut booked: Vec<Lesson> = Vec::new();
    for lesson_id in &lesson_ids {
        let lesson = match Lesson::get_by_id(&txn, *lesson_id).await {
            Ok(Some(lesson)) => lesson,
            Ok(None) => {
                let _ = txn.rollback().await;
                return (
                    StatusCode::NOT_FOUND,
                    Json(ApiResponse::<CreateOrderResponse>::error(format!(
                        "Lesson {} not found",
                        lesson_id
                    ))),
                );
            }
            Err(e) => {
                tracing::error!("Failed to fetch lesson {lesson_id}: {e}");
                let _ = txn.rollback().await;
                return server_error();
            }
        };

        match Lesson::reserve_space(&txn, lesson.id).await {
            Ok(true) => booked.push(lesson),
            Ok(false) => {
                let _ = txn.rollback().await;
                return bad_request(format!("No spaces left for lesson {}", lesson.subject));
            }
            Err(e) => {
                tracing::error!("Failed to reserve space on lesson {lesson_id}: {e}");
                let _ = txn.rollback().await;
                return server_error();
            }
        }
    }

    let order = match Order::create(&txn, &name, &phone).await {
        Ok(order) => order,
        Err(e) => {
            tracing::error!("Failed to insert order: {e}");
            let _ = txn.rollback().await;
            return server_error();
        }
    };

    let mut lines: Vec<BookedLessonResponse> = Vec::new();
    for lesson in &booked {
        match OrderLesson::create(
            &txn,
            order.id,
            lesson.id,
            &lesson.subject,
            &lesson.location,
            lesson.price,
        )
        .await
        {
            Ok(line) => lines.push(BookedLessonResponse::from(line)),
            Err(e) => {
                tracing::error!("Failed to insert order line: {e}");
                let _ = txn.rollback().await;
                return server_error();
            }
        }
    }

    if let Err(e) = txn.commit().await {
        tracing::error!("Failed to commit order: {e}");
        return server_error();
    }

    (
        StatusCode::CREATED,
        Json(ApiResponse::success(
            CreateOrderResponse {
                order_id: order.id,
                lessons: lines,
            },
            "Order placed successfully",
        )),
    )
}

fn bad_request(
    message: impl Into<String>,
) -> (StatusCode, Json<ApiResponse<CreateOrderResponse>>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<CreateOrderResponse>::error(message)),
    )
}

fn server_error() -> (StatusCode, Json<ApiResponse<CreateOrderResponse>>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::<CreateOrderResponse>::error("Database error")),
    )
}
