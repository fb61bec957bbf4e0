use super::DocumentStore;
use crate::error::{ObAppsError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed store. Saving writes a sibling temp file and renames it over
/// the target so a crash never leaves a half-written document, and keeps the
/// previous contents in `<path>.bak` when backups are enabled.
pub struct FileStore {
    path: PathBuf,
    make_backup: bool,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            make_backup: true,
        }
    }

    pub fn with_backup(mut self, make_backup: bool) -> Self {
        self.make_backup = make_backup;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(suffix);
        self.path.with_file_name(name)
    }
}

impl DocumentStore for FileStore {
    fn load(&self) -> Result<String> {
        if !self.path.exists() {
            return Ok(String::new());
        }
        fs::read_to_string(&self.path).map_err(ObAppsError::Io)
    }

    fn save(&mut self, text: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(ObAppsError::Io)?;
            }
        }
        if self.make_backup && self.path.exists() {
            fs::copy(&self.path, self.sibling(".bak")).map_err(ObAppsError::Io)?;
        }
        let tmp = self.sibling(".tmp");
        fs::write(&tmp, text).map_err(ObAppsError::Io)?;
        fs::rename(&tmp, &self.path).map_err(ObAppsError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("rc.xml"));
        assert_eq!(store.load().unwrap(), "");
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("rc.xml"));
        store.save("<applications/>\n").unwrap();
        assert_eq!(store.load().unwrap(), "<applications/>\n");
    }

    #[test]
    fn overwrite_keeps_a_backup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rc.xml");
        let mut store = FileStore::new(&path);
        store.save("first").unwrap();
        store.save("second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        assert_eq!(
            fs::read_to_string(dir.path().join("rc.xml.bak")).unwrap(),
            "first"
        );
    }

    #[test]
    fn backup_can_be_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rc.xml");
        let mut store = FileStore::new(&path).with_backup(false);
        store.save("first").unwrap();
        store.save("second").unwrap();
        assert!(!dir.path().join("rc.xml.bak").exists());
    }

    #[test]
    fn no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("rc.xml"));
        store.save("x").unwrap();
        assert!(!dir.path().join("rc.xml.tmp").exists());
    }
}
