//! Pizza resource routes.

use crate::handlers::pizza::{create, delete as delete_pizza, list, read, root, update};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn pizza_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/pizzas", get(list))
        .route("/pizza", post(create))
        .route("/pizza/:id", get(read).put(update).delete(delete_pizza))
        .with_state(state)
}
