use crate::{
    error::{ApiError, Result},
    models::CodeValue,
};
use rusqlite::{Connection, OptionalExtension};
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

const SELECT_COLUMNS: &str = "SELECT code_type, code, name, description, sort_order, is_active FROM code_values";

/// Lookup of reference code values. Calls may block on storage.
pub trait CodeService: Send + Sync {
    fn find_code_values_by_type(&self, code_type: &str) -> Result<Vec<CodeValue>>;

    fn find_code_value_by_type_and_code(&self, code_type: &str, code: &str) -> Result<CodeValue>;
}

pub struct SqliteCodeService {
    conn: Mutex<Connection>,
}

impl SqliteCodeService {
    pub fn new(conn: Connection) -> Self {
        Self { conn: Mutex::new(conn) }
    }

    fn connection(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| ApiError::Internal {
            message: "database connection lock poisoned".to_string(),
        })
    }
}

impl CodeService for SqliteCodeService {
    fn find_code_values_by_type(&self, code_type: &str) -> Result<Vec<CodeValue>> {
        let conn = self.connection()?;
        let mut stmt = conn.prepare_cached(&format!(
            "{SELECT_COLUMNS} WHERE code_type = ?1 ORDER BY sort_order, code"
        ))?;
        let codes = stmt
            .query_map([code_type], CodeValue::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        debug!("Found {} code values for type {}", codes.len(), code_type);
        Ok(codes)
    }

    fn find_code_value_by_type_and_code(&self, code_type: &str, code: &str) -> Result<CodeValue> {
        let conn = self.connection()?;
        let mut stmt = conn.prepare_cached(&format!(
            "{SELECT_COLUMNS} WHERE code_type = ?1 AND code = ?2"
        ))?;
        stmt.query_row([code_type, code], CodeValue::from_row)
            .optional()?
            .ok_or_else(|| ApiError::NotFound {
                code_type: code_type.to_string(),
                code: code.to_string(),
            })
    }
}
