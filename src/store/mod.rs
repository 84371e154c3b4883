//! Storage interface for pizza records, plus the concrete adapters.

mod memory;
mod sqlite;

pub use memory::MemoryPizzaStore;
pub use sqlite::{connect, ensure_schema, SqlitePizzaStore};

use crate::error::AppError;
use crate::model::{Pizza, PizzaDraft};
use async_trait::async_trait;

/// One capability per store round trip. Absence is an explicit `None`/`false`,
/// never an error: the caller decides how to surface a missing id.
#[async_trait]
pub trait PizzaStore: Send + Sync {
    /// All stored pizzas. Order is up to the adapter.
    async fn list(&self) -> Result<Vec<Pizza>, AppError>;

    /// The pizza with this id, if any.
    async fn find(&self, id: i64) -> Result<Option<Pizza>, AppError>;

    /// Insert a new record and return it with its assigned id. Any id in the
    /// draft is ignored.
    async fn insert(&self, draft: &PizzaDraft) -> Result<Pizza, AppError>;

    /// Overwrite name and description in place. `None` if the id is absent.
    async fn update(&self, id: i64, draft: &PizzaDraft) -> Result<Option<Pizza>, AppError>;

    /// Remove the record. `false` if the id was absent.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Cheap round trip for the readiness probe.
    async fn ping(&self) -> Result<(), AppError>;
}
