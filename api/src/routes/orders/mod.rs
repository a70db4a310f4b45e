//! # Orders Routes Module
//!
//! Defines and wires up routes for the `/orders` endpoint group.
//!
//! ## Structure
//! - `post.rs` — POST handlers (place an order against lesson inventory)
//! - `get.rs` — GET handlers (list placed orders with their lines)
//! - `common.rs` — shared order response models
//!
//! ## Usage
//! Call `order_routes()` to get a configured `Router` for `/orders` to be
//! mounted in the main app.

use axum::{
    Router,
    routing::{get, post},
};
use get::get_orders;
use post::place_order;
use util::state::AppState;

pub mod common;
pub mod get;
pub mod post;

/// Builds and returns the `/orders` route group.
///
/// Routes:
/// - `POST /orders` → place an order
/// - `GET  /orders` → list all orders
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(place_order))
        .route("/", get(get_orders))
}
