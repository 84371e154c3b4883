//! In-memory store adapter: id-keyed map behind a mutex. Used by tests and
//! as a stand-in when no database file is wanted.

use super::PizzaStore;
use crate::error::AppError;
use crate::model::{Pizza, PizzaDraft};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct MemoryPizzaStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    rows: BTreeMap<i64, Pizza>,
    /// Monotonic; never rewinds on delete, so ids are not reused.
    next_id: i64,
}

impl MemoryPizzaStore {
    pub fn new() -> Self {
        MemoryPizzaStore::default()
    }
}

#[async_trait]
impl PizzaStore for MemoryPizzaStore {
    async fn list(&self) -> Result<Vec<Pizza>, AppError> {
        let inner = self.inner.lock().await;
        Ok(inner.rows.values().cloned().collect())
    }

    async fn find(&self, id: i64) -> Result<Option<Pizza>, AppError> {
        let inner = self.inner.lock().await;
        Ok(inner.rows.get(&id).cloned())
    }

    async fn insert(&self, draft: &PizzaDraft) -> Result<Pizza, AppError> {
        let mut inner = self.inner.lock().await;
        inner.next_id += 1;
        let pizza = Pizza {
            id: inner.next_id,
            name: draft.name.clone(),
            description: draft.description.clone(),
        };
        inner.rows.insert(pizza.id, pizza.clone());
        Ok(pizza)
    }

    async fn update(&self, id: i64, draft: &PizzaDraft) -> Result<Option<Pizza>, AppError> {
        let mut inner = self.inner.lock().await;
        match inner.rows.get_mut(&id) {
            Some(pizza) => {
                pizza.name = draft.name.clone();
                pizza.description = draft.description.clone();
                Ok(Some(pizza.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut inner = self.inner.lock().await;
        Ok(inner.rows.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
