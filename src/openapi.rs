//! OpenAPI document generated from the declared pizza routes, plus the
//! routes that serve it.

use crate::error::{ErrorBody, ErrorDetail};
use crate::handlers::pizza;
use crate::model::{Pizza, PizzaDraft};
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "PizzaStore API",
        description = "Making the Pizzas you love",
        version = "v1"
    ),
    paths(
        pizza::root,
        pizza::list,
        pizza::create,
        pizza::read,
        pizza::update,
        pizza::delete,
    ),
    components(schemas(Pizza, PizzaDraft, ErrorBody, ErrorDetail))
)]
pub struct ApiDoc;

/// Raw document at /api-docs/openapi.json, interactive UI at /docs.
pub fn docs_routes() -> Router {
    let spec = ApiDoc::openapi();
    let json_spec = spec.clone();
    Router::new()
        .route(
            "/api-docs/openapi.json",
            get(move || async move { Json(json_spec) }),
        )
        .merge(Scalar::with_url("/docs", spec))
}
