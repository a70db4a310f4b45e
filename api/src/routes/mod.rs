//! HTTP route entry point.
//!
//! This module defines all HTTP entry points for the booking service.
//! Routes are organized by resource (lessons, orders, search, images,
//! health), each group built by its own module.
//!
//! Route groups include:
//! - `/health` → Health check endpoint
//! - `/lessons` → Lesson listing and updates
//! - `/orders` → Order placement and listing
//! - `/search` → Free-text lesson search
//! - `/images/{filename}` → Lesson image files

use crate::routes::{
    health::health_routes, images::get_image, lessons::lesson_routes, orders::order_routes,
    search::search_lessons,
};
use axum::{Router, routing::get};
use util::state::AppState;

pub mod common;
pub mod health;
pub mod images;
pub mod lessons;
pub mod orders;
pub mod search;

/// Builds the complete application router for all HTTP endpoints.
///
/// The returned router owns the given `AppState`, which carries the shared
/// database connection into every handler.
///
/// # Route Structure:
/// - `GET    /health`             → health probe
/// - `GET    /lessons`            → list all lessons
/// - `GET    /lessons/{lesson_id}` → get a single lesson
/// - `PUT    /lessons/{lesson_id}` → partial lesson update
/// - `GET    /orders`             → list placed orders
/// - `POST   /orders`             → place an order
/// - `GET    /search?q=`          → search lessons by text or number
/// - `GET    /images/{filename}`  → serve a lesson image
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .nest("/lessons", lesson_routes())
        .nest("/orders", order_routes())
        .route("/search", get(search_lessons))
        .route("/images/{filename}", get(get_image))
        .with_state(app_state)
}
