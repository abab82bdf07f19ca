use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::TestError;

/// Test context owning a scratch directory.
///
/// Each context gets its own temporary directory so tests can run in parallel without
/// sharing files. The directory is removed when the context is dropped.
pub struct TestContext {
    dir: TempDir,
}

impl TestContext {
    /// Creates a new test context with an empty scratch directory.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Directory created and ready for use
    /// - `Err(TestError::Io)` - Failed to create the directory
    pub fn new() -> Result<Self, TestError> {
        let dir = tempfile::Builder::new().prefix("warboard-test-").tempdir()?;

        Ok(Self { dir })
    }

    /// Path of a file inside the scratch directory. The file is not created.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Default location for the player cache file in tests.
    pub fn cache_path(&self) -> PathBuf {
        self.path("player_cache.json")
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}
