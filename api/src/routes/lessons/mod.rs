//! # Lessons Routes Module
//!
//! Defines and wires up routes for the `/lessons` endpoint group.
//!
//! ## Structure
//! - `get.rs` — GET handlers (list all lessons, fetch one lesson)
//! - `put.rs` — PUT handlers (partial lesson update)
//!
//! ## Usage
//! Call `lesson_routes()` to get a configured `Router` for `/lessons` to be
//! mounted in the main app.

use axum::{
    Router,
    routing::{get, put},
};
use get::{get_lesson, get_lessons};
use put::edit_lesson;
use util::state::AppState;

pub mod get;
pub mod put;

/// Builds and returns the `/lessons` route group.
///
/// Routes:
/// - `GET /lessons`              → list all lessons
/// - `GET /lessons/{lesson_id}`  → get a single lesson by ID
/// - `PUT /lessons/{lesson_id}`  → partial update of lesson fields
pub fn lesson_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_lessons))
        .route("/{lesson_id}", get(get_lesson))
        .route("/{lesson_id}", put(edit_lesson))
}
