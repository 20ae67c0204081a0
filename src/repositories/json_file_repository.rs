use crate::error::{StorageError, StorageResult};
use crate::models::Contact;
use crate::repositories::traits::ContactRepository;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Default location of the contact document, relative to the working
/// directory.
pub const DEFAULT_DATA_FILE: &str = "storage/data/contactsDB.json";

const EMPTY_DOCUMENT: &[u8] = b"[]";

/// Contact repository backed by a single JSON array on disk.
///
/// A missing file is created as `[]` on first load. Saves serialize the
/// whole collection to a sibling temp file and rename it over the target.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository for the document at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> StorageResult<()> {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => {
                fs::create_dir_all(dir).map_err(|e| StorageError::io(dir, e))
            }
            _ => Ok(()),
        }
    }

    /// Read the raw document, initialising it to `[]` if it does not exist.
    fn read_or_init(&self) -> StorageResult<Vec<u8>> {
        self.ensure_parent_dir()?;

        match fs::read(&self.path) {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "Initialising empty contact file");
                self.write_atomic(EMPTY_DOCUMENT)?;
                Ok(EMPTY_DOCUMENT.to_vec())
            }
            Err(e) => Err(StorageError::io(&self.path, e)),
        }
    }

    fn write_atomic(&self, data: &[u8]) -> StorageResult<()> {
        let tmp_path = self.path.with_extension("json.tmp");
        {
            let mut file =
                fs::File::create(&tmp_path).map_err(|e| StorageError::io(&tmp_path, e))?;
            file.write_all(data)
                .map_err(|e| StorageError::io(&tmp_path, e))?;
            file.sync_all().map_err(|e| StorageError::io(&tmp_path, e))?;
        }
        fs::rename(&tmp_path, &self.path).map_err(|e| StorageError::io(&self.path, e))
    }
}

impl ContactRepository for JsonFileRepository {
    fn load(&mut self) -> StorageResult<Vec<Contact>> {
        let data = self.read_or_init()?;
        let contacts: Vec<Contact> = serde_json::from_slice(&data)?;

        tracing::debug!(
            path = %self.path.display(),
            count = contacts.len(),
            "Loaded contacts"
        );
        Ok(contacts)
    }

    fn save(&mut self, contacts: &[Contact]) -> StorageResult<()> {
        self.ensure_parent_dir()?;
        let data = serde_json::to_vec(contacts)?;
        self.write_atomic(&data)?;

        tracing::debug!(
            path = %self.path.display(),
            count = contacts.len(),
            "Saved contacts"
        );
        Ok(())
    }

    fn describe(&self) -> String {
        format!("json file {}", self.path.display())
    }
}
