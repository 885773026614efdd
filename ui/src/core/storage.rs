//! Local persistence for small user preferences (currently only the theme).
//!
//! In the browser values live in `localStorage`. Host builds keep a JSON map
//! in the platform data directory so the same API is usable in tests.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("preference storage is not available")]
    Unavailable,
    #[error("storage backend error: {0}")]
    Backend(String),
    #[cfg(not(target_arch = "wasm32"))]
    #[error("preference file i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(not(target_arch = "wasm32"))]
    #[error("preference file is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read the value stored under `key`, if any.
pub fn load_preference(key: &str) -> Result<Option<String>, StorageError> {
    #[cfg(target_arch = "wasm32")]
    {
        local_storage()?
            .get_item(key)
            .map_err(|err| StorageError::Backend(format!("{err:?}")))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        PreferenceFile::default_location()?.load(key)
    }
}

/// Store `value` under `key`, replacing any previous value.
pub fn save_preference(key: &str, value: &str) -> Result<(), StorageError> {
    #[cfg(target_arch = "wasm32")]
    {
        local_storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Backend(format!("{err:?}")))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        PreferenceFile::default_location()?.save(key, value)
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .ok_or(StorageError::Unavailable)?
        .local_storage()
        .map_err(|err| StorageError::Backend(format!("{err:?}")))?
        .ok_or(StorageError::Unavailable)
}

/// JSON key/value file used off the web.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct PreferenceFile {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl PreferenceFile {
    const FILE_NAME: &'static str = "preferences.json";

    pub fn at(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_location() -> Result<Self, StorageError> {
        let dirs = directories::ProjectDirs::from("com", "EasyWay", "easyway")
            .ok_or(StorageError::Unavailable)?;
        Ok(Self::at(dirs.data_dir().join(Self::FILE_NAME)))
    }

    pub fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_map()?.remove(key))
    }

    pub fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_vec_pretty(&map)?)?;
        Ok(())
    }

    fn read_map(&self) -> Result<std::collections::BTreeMap<String, String>, StorageError> {
        match std::fs::read(&self.path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Default::default()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    fn scratch_file(name: &str) -> PreferenceFile {
        let dir = std::env::temp_dir().join(format!(
            "easyway-prefs-{name}-{}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        PreferenceFile::at(dir.join("preferences.json"))
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let file = scratch_file("missing");
        assert!(file.load("easy-way-theme").unwrap().is_none());
    }

    #[test]
    fn saved_value_is_read_back_and_overwritten() {
        let file = scratch_file("overwrite");
        file.save("easy-way-theme", "dark").unwrap();
        assert_eq!(file.load("easy-way-theme").unwrap().as_deref(), Some("dark"));

        file.save("easy-way-theme", "light").unwrap();
        assert_eq!(file.load("easy-way-theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let file = scratch_file("corrupt");
        std::fs::create_dir_all(file.path.parent().unwrap()).unwrap();
        std::fs::write(&file.path, b"not json").unwrap();
        assert!(matches!(file.load("easy-way-theme"), Err(StorageError::Json(_))));
    }
}
