use rusqlite::Connection;

use crate::error::Result;

pub const SCHEMA_VERSION: i64 = 1;

pub fn initialize(conn: &Connection) -> Result<()> {
    conn.execute_batch("PRAGMA journal_mode = WAL;")?;
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.pragma_update(None, "busy_timeout", 5000)?;

    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS metadata (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS files (
            path              TEXT PRIMARY KEY,
            name              TEXT NOT NULL,
            extension         TEXT,
            size_bytes        INTEGER NOT NULL DEFAULT 0,
            modified_at_ms    INTEGER NOT NULL,
            last_opened_at_ms INTEGER
        );

        CREATE TABLE IF NOT EXISTS life_areas (
            id               TEXT PRIMARY KEY,
            name             TEXT NOT NULL,
            icon_id          TEXT NOT NULL DEFAULT 'dot',
            color_bg         TEXT,
            color_fg         TEXT,
            last_activity_ms INTEGER,
            position         INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS tags (
            path         TEXT PRIMARY KEY REFERENCES files(path) ON DELETE CASCADE,
            life_area_id TEXT NOT NULL REFERENCES life_areas(id),
            confidence   REAL,
            tagged_at_ms INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_files_modified ON files(modified_at_ms);
        CREATE INDEX IF NOT EXISTS idx_tags_area ON tags(life_area_id);
        ",
    )?;

    let current: Option<i64> = conn
        .query_row("SELECT value FROM metadata WHERE key = 'schema_version'", [], |row| {
            row.get::<_, String>(0)
        })
        .ok()
        .and_then(|v| v.parse().ok());

    if current.is_none() {
        conn.execute(
            "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?1)",
            [SCHEMA_VERSION.to_string()],
        )?;
        tracing::debug!("initialized fresh schema v{SCHEMA_VERSION}");
    }

    Ok(())
}
