//! SQLite-backed store adapter: schema DDL and single-statement CRUD.

use super::PizzaStore;
use crate::error::AppError;
use crate::model::{Pizza, PizzaDraft};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Open the database behind `database_url`, creating the file if missing.
pub async fn connect(database_url: &str) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| AppError::BadRequest(format!("invalid DATABASE_URL: {}", e)))?
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await?;
    Ok(pool)
}

/// Create the `Pizzas` table if it does not exist. `AUTOINCREMENT` keeps ids
/// monotonic, so a deleted id is never handed out again.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS Pizzas (
            Id INTEGER PRIMARY KEY AUTOINCREMENT,
            Name TEXT NOT NULL,
            Description TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

pub struct SqlitePizzaStore {
    pool: SqlitePool,
}

impl SqlitePizzaStore {
    pub fn new(pool: SqlitePool) -> Self {
        SqlitePizzaStore { pool }
    }
}

type PizzaRow = (i64, String, String);

fn into_pizza((id, name, description): PizzaRow) -> Pizza {
    Pizza {
        id,
        name,
        description,
    }
}

#[async_trait]
impl PizzaStore for SqlitePizzaStore {
    async fn list(&self) -> Result<Vec<Pizza>, AppError> {
        let rows: Vec<PizzaRow> = sqlx::query_as("SELECT Id, Name, Description FROM Pizzas")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(into_pizza).collect())
    }

    async fn find(&self, id: i64) -> Result<Option<Pizza>, AppError> {
        tracing::debug!(id, "find pizza");
        let row: Option<PizzaRow> =
            sqlx::query_as("SELECT Id, Name, Description FROM Pizzas WHERE Id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(into_pizza))
    }

    async fn insert(&self, draft: &PizzaDraft) -> Result<Pizza, AppError> {
        tracing::debug!(name = %draft.name, "insert pizza");
        let row: PizzaRow = sqlx::query_as(
            "INSERT INTO Pizzas (Name, Description) VALUES (?, ?) RETURNING Id, Name, Description",
        )
        .bind(&draft.name)
        .bind(&draft.description)
        .fetch_one(&self.pool)
        .await?;
        Ok(into_pizza(row))
    }

    async fn update(&self, id: i64, draft: &PizzaDraft) -> Result<Option<Pizza>, AppError> {
        tracing::debug!(id, "update pizza");
        let row: Option<PizzaRow> = sqlx::query_as(
            "UPDATE Pizzas SET Name = ?, Description = ? WHERE Id = ? RETURNING Id, Name, Description",
        )
        .bind(&draft.name)
        .bind(&draft.description)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(into_pizza))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        tracing::debug!(id, "delete pizza");
        let result = sqlx::query("DELETE FROM Pizzas WHERE Id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
