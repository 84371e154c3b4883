//! The pizza record and its create/update payload.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored pizza. Wire form uses PascalCase keys (`Id`, `Name`, `Description`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Pizza {
    /// Assigned by the store on create; immutable, never reused after delete.
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// Client payload for create and update. A supplied `Id` parses but is
/// ignored: the store is authoritative for id assignment, and update never
/// rewrites the id.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct PizzaDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
}
