//! Directory scanning: the producer of the core's "already-scanned" input
//! feed. All file-system access lives here; the core only ever sees the
//! resulting records.

use std::path::Path;
use std::time::UNIX_EPOCH;

use anyhow::{Context, Result};
use walkdir::{DirEntry, WalkDir};

use aurora_core::FileRecord;

/// Walk the given roots and build records for every regular file. Hidden
/// entries and scan junk are skipped; unreadable entries are logged and
/// dropped rather than failing the whole scan.
pub fn scan_roots(roots: &[impl AsRef<Path>]) -> Result<Vec<FileRecord>> {
    let mut records = Vec::new();

    for root in roots {
        let root = root.as_ref();
        if !root.is_dir() {
            anyhow::bail!("not a directory: {}", root.display());
        }

        let before = records.len();
        let walker = WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| !is_hidden(e));

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    tracing::warn!("skipping unreadable entry: {e}");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            match record_for(&entry) {
                Ok(record) => records.push(record),
                Err(e) => tracing::warn!("skipping {}: {e}", entry.path().display()),
            }
        }

        tracing::info!(
            "scanned {}: {} files",
            root.display(),
            records.len() - before
        );
    }

    Ok(records)
}

/// Hidden files and directories (dotfiles, .DS_Store and friends) never
/// enter the catalogue.
fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

fn record_for(entry: &DirEntry) -> Result<FileRecord> {
    let path = entry.path();
    let meta = entry.metadata().context("metadata")?;
    let modified = meta.modified().context("mtime")?;
    let modified_at_ms = modified
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0);

    let name = entry.file_name().to_string_lossy().to_string();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    Ok(FileRecord {
        name,
        path: path.to_string_lossy().to_string(),
        extension,
        size_bytes: meta.len(),
        modified_at_ms,
        // The scanner doesn't know about opens; the store preserves any it
        // has recorded.
        last_opened_at_ms: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn scans_regular_files() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("invoice.pdf"), b"x").unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("sub/notes.md"), b"y").unwrap();

        let mut names: Vec<String> = scan_roots(&[dir.path()])
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        names.sort();
        assert_eq!(names, vec!["invoice.pdf", "notes.md"]);
    }

    #[test]
    fn skips_hidden_files_and_dirs() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(".DS_Store"), b"junk").unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        std::fs::write(dir.path().join(".git/config"), b"z").unwrap();
        std::fs::write(dir.path().join("real.txt"), b"ok").unwrap();

        let records = scan_roots(&[dir.path()]).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "real.txt");
    }

    #[test]
    fn extension_is_lowercased() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("Photo.JPG"), b"img").unwrap();

        let records = scan_roots(&[dir.path()]).unwrap();
        assert_eq!(records[0].extension.as_deref(), Some("jpg"));
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(scan_roots(&[missing]).is_err());
    }
}
