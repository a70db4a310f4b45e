//! Order listing routes.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use sea_orm::EntityTrait;
use util::state::AppState;

use db::models::{Order, OrderLesson};

use crate::response::ApiResponse;
use crate::routes::orders::common::{BookedLessonResponse, OrderResponse};

/// GET /orders
///
/// Returns every placed order together with its booked lesson lines, as
/// captured at order time.
///
/// ### Responses
/// - `200 OK` with the orders in `data`
/// - `500 Internal Server Error`
pub async fn get_orders(State(app_state): State<AppState>) -> impl IntoResponse {
    match Order::find()
        .find_with_related(OrderLesson)
        .all(app_state.db())
        .await
    {
        Ok(orders) => {
            let data: Vec<OrderResponse> = orders
                .into_iter()
                .map(|(order, lines)| OrderResponse {
                    id: order.id,
                    customer_name: order.customer_name,
                    phone: order.phone,
                    created_at: order.created_at.to_rfc3339(),
                    lessons: lines.into_iter().map(BookedLessonResponse::from).collect(),
                })
                .collect();

            (
                StatusCode::OK,
                Json(ApiResponse::success(data, "Orders retrieved successfully")),
            )
        }
        Err(e) => {
            tracing::error!("Failed to list orders: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Vec<OrderResponse>>::error("Database error")),
            )
        }
    }
}
