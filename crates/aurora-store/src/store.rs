use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params};

use aurora_core::{FileRecord, LifeArea, TagSuggestion};

use crate::error::Result;
use crate::schema;

/// SQLite-backed store for the scanned file catalogue, the user's life
/// areas, chosen tags, and a string-keyed scalar side-channel. The
/// inference core never touches this — callers load records here and pass
/// them in.
pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        schema::initialize(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        schema::initialize(&conn)?;
        Ok(Self { conn })
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    // --- Metadata (string-keyed scalar side-channel) ---

    pub fn get_metadata(&self, key: &str) -> Result<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM metadata WHERE key = ?1")?;
        let result = stmt.query_row([key], |row| row.get(0)).optional()?;
        Ok(result)
    }

    pub fn set_metadata(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO metadata (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    // --- File catalogue ---

    /// Upsert a batch of scanned records in one transaction. Keyed by path;
    /// re-scanning refreshes timestamps and sizes.
    pub fn upsert_files(&self, files: &[FileRecord]) -> Result<usize> {
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO files (path, name, extension, size_bytes, modified_at_ms, last_opened_at_ms)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                 ON CONFLICT(path) DO UPDATE SET
                     name = excluded.name,
                     extension = excluded.extension,
                     size_bytes = excluded.size_bytes,
                     modified_at_ms = excluded.modified_at_ms,
                     last_opened_at_ms = COALESCE(excluded.last_opened_at_ms, files.last_opened_at_ms)",
            )?;
            for f in files {
                stmt.execute(params![
                    f.path,
                    f.name,
                    f.extension,
                    f.size_bytes,
                    f.modified_at_ms,
                    f.last_opened_at_ms,
                ])?;
            }
        }
        tx.commit()?;
        Ok(files.len())
    }

    /// The full catalogue, most recently modified first.
    pub fn all_files(&self) -> Result<Vec<FileRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT path, name, extension, size_bytes, modified_at_ms, last_opened_at_ms
             FROM files ORDER BY modified_at_ms DESC, path",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(FileRecord {
                path: row.get(0)?,
                name: row.get(1)?,
                extension: row.get(2)?,
                size_bytes: row.get(3)?,
                modified_at_ms: row.get(4)?,
                last_opened_at_ms: row.get(5)?,
            })
        })?;
        let mut files = Vec::new();
        for row in rows {
            files.push(row?);
        }
        Ok(files)
    }

    pub fn file_count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM files", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Record that a file was opened; feeds the selector's last-touch data.
    pub fn mark_opened(&self, path: &str, opened_at_ms: i64) -> Result<()> {
        self.conn.execute(
            "UPDATE files SET last_opened_at_ms = ?2 WHERE path = ?1",
            params![path, opened_at_ms],
        )?;
        Ok(())
    }

    // --- Life areas ---

    pub fn add_life_area(&self, area: &LifeArea) -> Result<()> {
        let (bg, fg) = match &area.color_pair {
            Some((bg, fg)) => (Some(bg.as_str()), Some(fg.as_str())),
            None => (None, None),
        };
        self.conn.execute(
            "INSERT OR REPLACE INTO life_areas (id, name, icon_id, color_bg, color_fg, last_activity_ms, position)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6,
                     COALESCE((SELECT position FROM life_areas WHERE id = ?1),
                              (SELECT COUNT(*) FROM life_areas)))",
            params![area.id, area.name, area.icon_id, bg, fg, area.last_activity_ms],
        )?;
        Ok(())
    }

    /// Configured life areas in their stable display order. Ordering matters:
    /// the classifier breaks confidence ties by supply order.
    pub fn life_areas(&self) -> Result<Vec<LifeArea>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, icon_id, color_bg, color_fg, last_activity_ms
             FROM life_areas ORDER BY position, id",
        )?;
        let rows = stmt.query_map([], |row| {
            let bg: Option<String> = row.get(3)?;
            let fg: Option<String> = row.get(4)?;
            Ok(LifeArea {
                id: row.get(0)?,
                name: row.get(1)?,
                icon_id: row.get(2)?,
                color_pair: bg.zip(fg),
                last_activity_ms: row.get(5)?,
            })
        })?;
        let mut areas = Vec::new();
        for row in rows {
            areas.push(row?);
        }
        Ok(areas)
    }

    pub fn touch_life_area(&self, id: &str, at_ms: i64) -> Result<()> {
        self.conn.execute(
            "UPDATE life_areas SET last_activity_ms = ?2 WHERE id = ?1",
            params![id, at_ms],
        )?;
        Ok(())
    }

    // --- Chosen tags (the persisted-state boundary) ---

    /// Persist the user's chosen tag for a file. `confidence` is recorded
    /// when the choice confirmed a classifier suggestion, None for a manual
    /// tag.
    pub fn set_tag(&self, path: &str, suggestion: Option<&TagSuggestion>, area_id: &str, at_ms: i64) -> Result<()> {
        let confidence = suggestion
            .filter(|s| s.life_area_id == area_id)
            .map(|s| s.confidence);
        self.conn.execute(
            "INSERT OR REPLACE INTO tags (path, life_area_id, confidence, tagged_at_ms)
             VALUES (?1, ?2, ?3, ?4)",
            params![path, area_id, confidence, at_ms],
        )?;
        Ok(())
    }

    pub fn tag_for(&self, path: &str) -> Result<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT life_area_id FROM tags WHERE path = ?1")?;
        let result = stmt.query_row([path], |row| row.get(0)).optional()?;
        Ok(result)
    }

    pub fn tags_for_area(&self, area_id: &str) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT path FROM tags WHERE life_area_id = ?1 ORDER BY tagged_at_ms DESC",
        )?;
        let rows = stmt.query_map([area_id], |row| row.get(0))?;
        let mut paths = Vec::new();
        for row in rows {
            paths.push(row?);
        }
        Ok(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(path: &str, modified: i64) -> FileRecord {
        FileRecord {
            name: path.rsplit('/').next().unwrap().to_string(),
            path: path.to_string(),
            extension: Some("md".to_string()),
            size_bytes: 64,
            modified_at_ms: modified,
            last_opened_at_ms: None,
        }
    }

    #[test]
    fn metadata_round_trip() {
        let store = Store::open_in_memory().unwrap();
        assert_eq!(store.get_metadata("chosen_index").unwrap(), None);
        store.set_metadata("chosen_index", "2").unwrap();
        assert_eq!(
            store.get_metadata("chosen_index").unwrap().as_deref(),
            Some("2")
        );
    }

    #[test]
    fn upsert_refreshes_without_duplicating() {
        let store = Store::open_in_memory().unwrap();
        store.upsert_files(&[record("/a", 100)]).unwrap();
        store.upsert_files(&[record("/a", 200), record("/b", 50)]).unwrap();

        let files = store.all_files().unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].path, "/a");
        assert_eq!(files[0].modified_at_ms, 200);
    }

    #[test]
    fn upsert_keeps_known_open_timestamp() {
        let store = Store::open_in_memory().unwrap();
        store.upsert_files(&[record("/a", 100)]).unwrap();
        store.mark_opened("/a", 150).unwrap();
        // Re-scan knows nothing about opens; the recorded one survives.
        store.upsert_files(&[record("/a", 300)]).unwrap();

        let files = store.all_files().unwrap();
        assert_eq!(files[0].last_opened_at_ms, Some(150));
    }

    #[test]
    fn life_areas_keep_insertion_order() {
        let store = Store::open_in_memory().unwrap();
        for id in ["money", "health", "work"] {
            store.add_life_area(&LifeArea::new(id, id, "dot")).unwrap();
        }
        let ids: Vec<String> = store.life_areas().unwrap().into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["money", "health", "work"]);
    }

    #[test]
    fn re_adding_an_area_keeps_its_position() {
        let store = Store::open_in_memory().unwrap();
        for id in ["money", "health"] {
            store.add_life_area(&LifeArea::new(id, id, "dot")).unwrap();
        }
        store
            .add_life_area(&LifeArea::new("money", "Money", "coin"))
            .unwrap();

        let areas = store.life_areas().unwrap();
        assert_eq!(areas[0].id, "money");
        assert_eq!(areas[0].name, "Money");
    }

    #[test]
    fn chosen_tag_round_trip() {
        let store = Store::open_in_memory().unwrap();
        store.upsert_files(&[record("/a", 100)]).unwrap();
        store.add_life_area(&LifeArea::new("work", "Work", "dot")).unwrap();

        let suggestion = TagSuggestion {
            life_area_id: "work".to_string(),
            confidence: 0.75,
        };
        store.set_tag("/a", Some(&suggestion), "work", 500).unwrap();
        assert_eq!(store.tag_for("/a").unwrap().as_deref(), Some("work"));
        assert_eq!(store.tags_for_area("work").unwrap(), vec!["/a"]);
    }

    #[test]
    fn manual_tag_records_no_confidence() {
        let store = Store::open_in_memory().unwrap();
        store.upsert_files(&[record("/a", 100)]).unwrap();
        store.add_life_area(&LifeArea::new("home", "Home", "dot")).unwrap();
        store.set_tag("/a", None, "home", 500).unwrap();

        let confidence: Option<f64> = store
            .conn()
            .query_row("SELECT confidence FROM tags WHERE path = '/a'", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(confidence, None);
    }
}
