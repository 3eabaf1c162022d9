//! Scratch directories for tests that write record files.

use std::path::PathBuf;

use tempfile::TempDir;

/// A temporary directory plus a record path inside it that does not exist yet.
///
/// The directory is removed when the value is dropped, so keep it alive for
/// as long as the path is in use.
pub struct ScratchRecord {
    _dir: TempDir,
    path: PathBuf,
}

impl ScratchRecord {
    pub fn new(file_name: &str) -> std::io::Result<Self> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(file_name);
        Ok(Self { _dir: dir, path })
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Create an empty file at the record path.
    pub fn occupy(&self) -> std::io::Result<()> {
        std::fs::write(&self.path, b"")
    }
}

/// Fresh scratch location for a `records.csv` file.
pub fn record_file() -> ScratchRecord {
    match ScratchRecord::new("records.csv") {
        Ok(scratch) => scratch,
        Err(e) => panic!("failed to create scratch directory: {e}"),
    }
}
