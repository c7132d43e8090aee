//! Recent generated codes.
//!
//! Every successful generation records its kind and payload so the
//! frontend can re-render recent codes without retyping them.

use serde::Serialize;

use crate::{Database, DbError};

/// One previously generated code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub kind: String,
    pub payload: String,
    pub created_at: String,
}

impl Database {
    /// Record a generated payload. Returns the new row id.
    pub fn insert_history(&self, kind: &str, payload: &str) -> Result<i64, DbError> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO history (kind, payload) VALUES (?1, ?2)",
                rusqlite::params![kind, payload],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    /// Newest entries first.
    pub fn recent_history(&self, limit: u32) -> Result<Vec<HistoryEntry>, DbError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, kind, payload, created_at FROM history
                 ORDER BY id DESC LIMIT ?1",
            )?;
            let rows = stmt.query_map([limit], |row| {
                Ok(HistoryEntry {
                    id: row.get(0)?,
                    kind: row.get(1)?,
                    payload: row.get(2)?,
                    created_at: row.get(3)?,
                })
            })?;
            let mut entries = Vec::new();
            for row in rows {
                entries.push(row?);
            }
            Ok(entries)
        })
    }

    pub fn clear_history(&self) -> Result<(), DbError> {
        self.with_conn(|conn| {
            conn.execute("DELETE FROM history", [])?;
            Ok(())
        })
    }

    /// Drop everything but the newest `keep` entries.
    pub fn prune_history(&self, keep: u32) -> Result<u32, DbError> {
        self.with_conn(|conn| {
            let deleted = conn.execute(
                "DELETE FROM history WHERE id NOT IN
                 (SELECT id FROM history ORDER BY id DESC LIMIT ?1)",
                [keep],
            )?;
            Ok(deleted as u32)
        })
    }
}
