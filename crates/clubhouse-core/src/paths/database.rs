//! Database path resolution.

use std::path::{Path, PathBuf};

use super::error::PathError;
use super::platform::{data_root, ensure_dir};

pub const DATABASE_FILE_NAME: &str = "clubhouse.db";

/// Get the path to the clubhouse `SQLite` database file.
///
/// Returns `<data_root>/data/clubhouse.db`, creating `data/` if needed.
pub fn database_path() -> Result<PathBuf, PathError> {
    database_path_in(&data_root()?)
}

/// Database file location under an explicit data root.
pub fn database_path_in(root: &Path) -> Result<PathBuf, PathError> {
    let data_dir = root.join("data");
    ensure_dir(&data_dir)?;
    Ok(data_dir.join(DATABASE_FILE_NAME))
}
