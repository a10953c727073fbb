// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Session flag storage over SQLite

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension};
use thiserror::Error;

const KEY_HAS_ENTERED: &str = "app.hasEntered";
const KEY_LAST_USER_ID: &str = "app.lastUserId";
const KEY_ENTERED_AT: &str = "app.enteredAt";

/// Errors from session persistence
#[derive(Debug, Error)]
pub enum SessionDbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No platform data directory available")]
    NoDataDir,
}

/// Key-value store backing the session flags
pub struct SessionDb {
    conn: Connection,
}

impl SessionDb {
    /// Open (creating if needed) the session database at `path`
    pub fn open(path: &Path) -> Result<Self, SessionDbError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        Self::init(conn)
    }

    /// Open the session database at the platform-standard location
    pub fn open_default() -> Result<Self, SessionDbError> {
        Self::open(&Self::default_path()?)
    }

    /// In-memory database, for tests and ephemeral runs
    pub fn open_in_memory() -> Result<Self, SessionDbError> {
        Self::init(Connection::open_in_memory()?)
    }

    /// Platform-standard database path, e.g.
    /// `~/.local/share/barbernet/session.db` on Linux
    pub fn default_path() -> Result<PathBuf, SessionDbError> {
        let mut path = dirs::data_dir().ok_or(SessionDbError::NoDataDir)?;
        path.push("barbernet");
        path.push("session.db");
        Ok(path)
    }

    fn init(conn: Connection) -> Result<Self, SessionDbError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS session_kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;
        Ok(Self { conn })
    }

    /// Record that the user completed the welcome flow as `user_id`
    pub fn mark_entered(&self, user_id: &str) -> Result<(), SessionDbError> {
        self.set(KEY_HAS_ENTERED, "1")?;
        self.set(KEY_LAST_USER_ID, user_id)?;
        self.set(KEY_ENTERED_AT, &Utc::now().to_rfc3339())?;
        tracing::debug!(user_id, "session marked as entered");
        Ok(())
    }

    /// Whether the welcome flow has ever been completed on this device
    pub fn has_entered(&self) -> Result<bool, SessionDbError> {
        Ok(self.get(KEY_HAS_ENTERED)?.as_deref() == Some("1"))
    }

    /// The user id recorded by the last completed welcome flow
    pub fn last_user_id(&self) -> Result<Option<String>, SessionDbError> {
        self.get(KEY_LAST_USER_ID)
    }

    /// When the welcome flow was last completed
    pub fn entered_at(&self) -> Result<Option<DateTime<Utc>>, SessionDbError> {
        Ok(self
            .get(KEY_ENTERED_AT)?
            .and_then(|v| DateTime::parse_from_rfc3339(&v).ok())
            .map(|dt| dt.with_timezone(&Utc)))
    }

    /// Forget the session flags (sign-out path)
    pub fn clear_entered(&self) -> Result<(), SessionDbError> {
        self.conn.execute(
            "DELETE FROM session_kv WHERE key IN (?1, ?2, ?3)",
            [KEY_HAS_ENTERED, KEY_LAST_USER_ID, KEY_ENTERED_AT],
        )?;
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>, SessionDbError> {
        let value = self
            .conn
            .query_row("SELECT value FROM session_kv WHERE key = ?1", [key], |row| row.get(0))
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionDbError> {
        self.conn.execute(
            "INSERT INTO session_kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            [key, value],
        )?;
        Ok(())
    }
}
