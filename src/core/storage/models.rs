use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored news row. Rows are append-only: they are created by ingestion,
/// never updated, and removed only by the bulk drop operation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq, Eq)]
pub struct NewsRecord {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub date: String,
    pub link: String,
}
