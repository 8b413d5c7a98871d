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

use crate::core::TwiError;

const APP_NAME: &str = "twi-heritage";

pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        if let Err(e) = fs::create_dir_all(&app_dir) {
            tracing::warn!("Could not create {}: {}", app_dir.display(), e);
        }
        app_dir
    } else {
        PathBuf::from(".")
    }
}

pub fn save_json<T: Serialize>(data: &T, filename: &str) -> Result<(), TwiError> {
    save_json_in(&get_app_data_dir(), data, filename)
}

pub fn load_json_or_default<T: for<'de> Deserialize<'de> + Default>(filename: &str) -> T {
    load_json_or_default_in(&get_app_data_dir(), filename)
}

pub fn save_json_in<T: Serialize>(dir: &Path, data: &T, filename: &str) -> Result<(), TwiError> {
    let file_path = dir.join(filename);
    let json = serde_json::to_string_pretty(data)?;
    fs::write(&file_path, json)?;
    tracing::info!("Data saved to: {}", file_path.display());
    Ok(())
}

/// Missing files load as `T::default()`.
pub fn load_json_in<T: for<'de> Deserialize<'de> + Default>(
    dir: &Path,
    filename: &str,
) -> Result<T, TwiError> {
    let file_path = dir.join(filename);

    if !file_path.exists() {
        return Ok(T::default());
    }

    let json = fs::read_to_string(&file_path)?;
    let data: T = serde_json::from_str(&json)?;
    tracing::info!("Data loaded from: {}", file_path.display());
    Ok(data)
}

pub fn load_json_or_default_in<T: for<'de> Deserialize<'de> + Default>(
    dir: &Path,
    filename: &str,
) -> T {
    match load_json_in::<T>(dir, filename) {
        Ok(data) => data,
        Err(e) => {
            tracing::warn!("Failed to load {}: {}. Using defaults.", filename, e);
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        count: u32,
    }

    #[test]
    fn test_round_trip_in_dir() {
        let dir = tempfile::tempdir().unwrap();
        let sample = Sample { name: "Akwaaba".to_string(), count: 3 };

        save_json_in(dir.path(), &sample, "sample.json").unwrap();
        let loaded: Sample = load_json_in(dir.path(), "sample.json").unwrap();
        assert_eq!(loaded, sample);
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let loaded: Sample = load_json_in(dir.path(), "nothing.json").unwrap();
        assert_eq!(loaded, Sample::default());
    }

    #[test]
    fn test_corrupt_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.json"), "{ \"name\": ").unwrap();

        assert!(load_json_in::<Sample>(dir.path(), "broken.json").is_err());
        let loaded: Sample = load_json_or_default_in(dir.path(), "broken.json");
        assert_eq!(loaded, Sample::default());
    }
}
