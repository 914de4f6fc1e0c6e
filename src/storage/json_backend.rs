//! JSON file persistence for the store.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use super::{Result, Store, StoreError};

const TMP_SUFFIX: &str = "tmp";
const DEFAULT_FILE_NAME: &str = "store.json";
const APP_DIR_NAME: &str = "budgetwise";

/// Loads and saves the whole store as a single JSON document.
///
/// Writes go through a temp file and rename, so a crash mid-save never
/// truncates existing data.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backend rooted at the platform data directory.
    pub fn new_default() -> Result<Self> {
        let base = dirs::data_dir()
            .ok_or_else(|| StoreError::Storage("no platform data directory".into()))?;
        Ok(Self::new(base.join(APP_DIR_NAME).join(DEFAULT_FILE_NAME)))
    }

    /// Reads the store, or returns an empty one when the file is absent.
    pub fn load(&self) -> Result<Store> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Store::default())
        }
    }

    pub fn save(&self, store: &Store) -> Result<()> {
        let json = serde_json::to_string_pretty(store)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
