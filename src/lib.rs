//! PizzaStore: a minimal CRUD API for the pizza resource, backed by SQLite,
//! with generated OpenAPI documentation.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use model::{Pizza, PizzaDraft};
pub use openapi::{docs_routes, ApiDoc};
pub use routes::{common_routes, pizza_routes};
pub use state::AppState;
pub use store::{MemoryPizzaStore, PizzaStore, SqlitePizzaStore};
