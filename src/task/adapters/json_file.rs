//! JSON file task store.
//!
//! The collection lives in a single file holding a JSON array of
//! [`TaskRecord`]s. File access goes through a capability handle on the
//! parent directory.

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;
use std::sync::Arc;
use tracing::debug;

use crate::task::{
    domain::TaskRecord,
    ports::{StoreError, TaskStore},
};

/// Content written to a freshly created store file.
const EMPTY_COLLECTION: &str = "[]";

/// Task store persisted as a JSON array in one file.
#[derive(Debug, Clone)]
pub struct JsonFileTaskStore {
    dir: Arc<Dir>,
    file_name: String,
    path: Utf8PathBuf,
}

impl JsonFileTaskStore {
    /// Opens the store at `path`, creating the parent directory and an empty
    /// collection file when they do not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] when `path` has no file name or the
    /// directory or file cannot be created.
    pub fn open(store_path: impl AsRef<Utf8Path>) -> Result<Self, StoreError> {
        let path = store_path.as_ref();
        let file_name = path.file_name().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "store path must include a file name")
        })?;
        let parent = path
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));

        Dir::create_ambient_dir_all(parent, ambient_authority())?;
        let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
        if !dir.exists(file_name) {
            dir.write(file_name, EMPTY_COLLECTION)?;
            debug!(path = %path, "created empty task store");
        }

        Ok(Self {
            dir: Arc::new(dir),
            file_name: file_name.to_owned(),
            path: path.to_owned(),
        })
    }

    /// Returns the path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    fn temp_file_name(&self) -> String {
        format!(".{}.tmp", self.file_name)
    }
}

/// Decodes file content, requiring a top-level JSON array.
fn decode_records(contents: &str) -> Result<Vec<TaskRecord>, StoreError> {
    let value: serde_json::Value = serde_json::from_str(contents)?;
    if !value.is_array() {
        return Err(StoreError::NotASequence);
    }
    Ok(serde_json::from_value(value)?)
}

fn join_error(err: tokio::task::JoinError) -> StoreError {
    StoreError::Io(io::Error::other(err))
}

#[async_trait]
impl TaskStore for JsonFileTaskStore {
    async fn load_all(&self) -> Result<Vec<TaskRecord>, StoreError> {
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();
        let contents = tokio::task::spawn_blocking(move || dir.read_to_string(file_name))
            .await
            .map_err(join_error)??;

        let records = decode_records(&contents)?;
        debug!(path = %self.path, count = records.len(), "read task store");
        Ok(records)
    }

    async fn replace_all(&self, records: &[TaskRecord]) -> Result<(), StoreError> {
        let contents = serde_json::to_string_pretty(records)?;
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();
        let temp_name = self.temp_file_name();

        tokio::task::spawn_blocking(move || -> io::Result<()> {
            dir.write(&temp_name, contents)?;
            dir.rename(&temp_name, &dir, &file_name)
        })
        .await
        .map_err(join_error)??;

        debug!(path = %self.path, count = records.len(), "wrote task store");
        Ok(())
    }
}
