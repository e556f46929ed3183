//! Connection provider for the data-access layer
//!
//! The tables in this crate borrow an already-open connection; this module
//! is where those connections come from. Nothing here manages lifecycle
//! beyond opening — the caller owns the connection and its shutdown.
use crate::config::DatabaseConfig;
use crate::core::Result;
use rusqlite::Connection;
use tracing::debug;

/// Opens a SQLite database at `db_path` (or `:memory:`) and applies the
/// baseline pragmas.
pub fn connect(db_path: &str) -> Result<Connection> {
    debug!("Opening database at {}", db_path);
    let conn = Connection::open(db_path)?;
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    Ok(conn)
}

/// Opens the database described by a `[database]` configuration section.
pub fn connect_with_config(config: &DatabaseConfig) -> Result<Connection> {
    debug!("Opening database at {}", config.path);
    let conn = Connection::open(&config.path)?;
    if config.foreign_keys.unwrap_or(true) {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    }
    if let Some(mode) = &config.journal_mode {
        conn.pragma_update(None, "journal_mode", mode.as_str())?;
    }
    Ok(conn)
}
