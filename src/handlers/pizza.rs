//! Pizza CRUD handlers: list, create, read, update, delete.

use crate::error::{AppError, ErrorBody};
use crate::model::{Pizza, PizzaDraft};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

/// GET / — plain text greeting.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Greeting", body = String, content_type = "text/plain")
    )
)]
pub async fn root() -> &'static str {
    "Hello World!"
}

/// GET /pizzas — every stored pizza.
#[utoipa::path(
    get,
    path = "/pizzas",
    tag = "pizza",
    responses((status = 200, description = "All stored pizzas", body = [Pizza]))
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Pizza>>, AppError> {
    let pizzas = state.store.list().await?;
    Ok(Json(pizzas))
}

/// POST /pizza — insert a new pizza; the store assigns the id.
#[utoipa::path(
    post,
    path = "/pizza",
    tag = "pizza",
    request_body = PizzaDraft,
    responses(
        (status = 201, description = "Created", body = Pizza,
         headers(("Location" = String, description = "Path of the created pizza")))
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<PizzaDraft>,
) -> Result<impl IntoResponse, AppError> {
    let pizza = state.store.insert(&draft).await?;
    let location = format!("/pizza/{}", pizza.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(pizza)))
}

/// GET /pizza/{id} — one pizza, or JSON `null` when the id is unknown.
/// Absence is a normal outcome here, not an error.
#[utoipa::path(
    get,
    path = "/pizza/{id}",
    tag = "pizza",
    params(("id" = i64, Path, description = "Pizza id")),
    responses((status = 200, description = "The pizza, or null when absent", body = Pizza))
)]
pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Option<Pizza>>, AppError> {
    let pizza = state.store.find(id).await?;
    Ok(Json(pizza))
}

/// PUT /pizza/{id} — overwrite name and description in place.
#[utoipa::path(
    put,
    path = "/pizza/{id}",
    tag = "pizza",
    params(("id" = i64, Path, description = "Pizza id")),
    request_body = PizzaDraft,
    responses(
        (status = 204, description = "Updated"),
        (status = 404, description = "No pizza with this id", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(draft): Json<PizzaDraft>,
) -> Result<StatusCode, AppError> {
    state
        .store
        .update(id, &draft)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("pizza {}", id)))?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /pizza/{id} — remove the pizza.
#[utoipa::path(
    delete,
    path = "/pizza/{id}",
    tag = "pizza",
    params(("id" = i64, Path, description = "Pizza id")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "No pizza with this id", body = ErrorBody)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if !state.store.delete(id).await? {
        return Err(AppError::NotFound(format!("pizza {}", id)));
    }
    Ok(StatusCode::OK)
}
