use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use serde::{
    Deserialize,
    Serialize,
};

use crate::core::{
    Result,
    WordMatchError,
};

const APP_NAME: &str = "wordmatch";

/// `<platform config dir>/wordmatch/<filename>`, or the working directory
/// when the platform has no config dir.
pub fn config_file_path(filename: &str) -> PathBuf {
    dirs::config_dir().map(|dir| dir.join(APP_NAME)).unwrap_or_else(|| PathBuf::from(".")).join(filename)
}

pub fn save_json_to<T: Serialize>(data: &T, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(data)?;
    fs::write(file_path, json)?;
    log::debug!("Data saved to: {}", file_path.display());
    Ok(())
}

/// Missing files load as `T::default()`. For optional files such as settings.
pub fn load_json_from<T: for<'de> Deserialize<'de> + Default>(file_path: &Path) -> Result<T> {
    if !file_path.exists() {
        return Ok(T::default());
    }
    load_json_required(file_path)
}

/// Backing data of a store. A missing file is `StoreUnavailable`.
pub fn load_json_required<T: for<'de> Deserialize<'de>>(file_path: &Path) -> Result<T> {
    let json = fs::read_to_string(file_path).map_err(|e| {
        WordMatchError::StoreUnavailable(format!("Failed to read {}: {}", file_path.display(), e))
    })?;
    let data: T = serde_json::from_str(&json)?;
    log::debug!("Data loaded from: {}", file_path.display());
    Ok(data)
}

/// Unreadable or corrupt files fall back to defaults with a warning.
pub fn load_json_or_default<T: for<'de> Deserialize<'de> + Default>(file_path: &Path) -> T {
    load_json_from(file_path).unwrap_or_else(|e| {
        log::warn!("Failed to load {}: {}. Using defaults.", file_path.display(), e);
        T::default()
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_json_round_trip_and_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("data.json");

        let missing: HashMap<String, u32> = load_json_from(&path).unwrap();
        assert!(missing.is_empty());

        let mut data = HashMap::new();
        data.insert("easy".to_string(), 3u32);
        save_json_to(&data, &path).unwrap();

        let loaded: HashMap<String, u32> = load_json_from(&path).unwrap();
        assert_eq!(loaded, data);
        let required: HashMap<String, u32> = load_json_required(&path).unwrap();
        assert_eq!(required, data);
    }

    #[test]
    fn test_required_file_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let result: Result<Vec<u32>> = load_json_required(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(WordMatchError::StoreUnavailable(_))));
    }

    #[test]
    fn test_corrupt_file_is_an_error_or_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let result: Result<HashMap<String, u32>> = load_json_from(&path);
        assert!(matches!(result, Err(WordMatchError::Json(_))));

        let fallback: HashMap<String, u32> = load_json_or_default(&path);
        assert!(fallback.is_empty());
    }

    #[test]
    fn test_config_file_path_ends_with_app_file() {
        let path = config_file_path("settings.json");
        assert!(path.ends_with(Path::new(APP_NAME).join("settings.json")) || path.starts_with("."));
        assert_eq!(path.file_name().unwrap(), "settings.json");
    }
}
