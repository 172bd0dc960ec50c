pub mod database;
pub mod identity_store;

pub use identity_store::{IdentityStore, MemoryIdentityStore, SqliteIdentityStore, StoreError};

use std::fs;
use std::path::Path;

/// Creates the directory holding `trilingo.db` (and any missing parents).
pub fn ensure_data_dir<P: AsRef<Path>>(dir: P) -> std::io::Result<()> {
    fs::create_dir_all(dir)?;
    Ok(())
}

pub const DEFAULT_DATA_DIR: &str = "data";
const DATABASE_FILE: &str = "trilingo.db";

/// Opens the SQLite identity store inside `data_dir`, creating the directory if needed.
pub fn open_sqlite_store<P: AsRef<Path>>(data_dir: P) -> Result<SqliteIdentityStore, StoreError> {
    let data_dir = data_dir.as_ref();
    ensure_data_dir(data_dir)?;
    SqliteIdentityStore::open(data_dir.join(DATABASE_FILE))
}
