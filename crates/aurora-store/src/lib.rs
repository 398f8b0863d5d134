pub mod config;
pub mod error;
pub mod schema;
pub mod store;

pub use config::{Config, data_dir, default_base_dir};
pub use error::{Result, StoreError};
pub use store::Store;

use std::path::PathBuf;

/// Open the store in the resolved data dir, creating it on first use.
pub fn open_default() -> Result<Store> {
    let base = data_dir();
    std::fs::create_dir_all(&base)?;
    Store::open(&db_path(&base))
}

/// Database file path within a base directory.
pub fn db_path(base: &std::path::Path) -> PathBuf {
    base.join("aurora.db")
}
