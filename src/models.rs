use rusqlite::Row;
use serde::{Deserialize, Serialize};

/// A reference value keyed by its type and its identifier within that type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeValue {
    pub code_type: String,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub sort_order: i64,
    pub is_active: bool,
}

impl CodeValue {
    pub fn new(code_type: &str, code: &str, name: &str) -> Self {
        Self {
            code_type: code_type.to_string(),
            code: code.to_string(),
            name: name.to_string(),
            description: None,
            sort_order: 0,
            is_active: true,
        }
    }

    /// Column order must match `SELECT_COLUMNS` in the service.
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            code_type: row.get(0)?,
            code: row.get(1)?,
            name: row.get(2)?,
            description: row.get(3)?,
            sort_order: row.get(4)?,
            is_active: row.get(5)?,
        })
    }
}
