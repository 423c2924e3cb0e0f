use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE: &str = "settings.json";
pub const CONFIG_DIR: &str = "clipfloat";

/// Last known window position and size, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geometry {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Everything persisted between sessions: window geometry and the clip list,
/// most recent last. Every field defaults when missing so old or hand-edited
/// files load without complaint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub clips: Vec<String>,
    /// When enabled the application initialises the logger at debug level.
    #[serde(default)]
    pub debug_logging: bool,
}

impl Settings {
    /// Load from `path`. A missing, empty or unparseable file yields the
    /// defaults; persistence is best-effort and never fatal.
    pub fn load(path: &Path) -> Self {
        load_internal(path).unwrap_or_else(|e| {
            tracing::warn!("failed to load settings from {}: {e}", path.display());
            Self::default()
        })
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Per-user settings file location, falling back to the working directory
    /// when the platform has no config directory.
    pub fn config_path() -> PathBuf {
        dirs_next::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR)
            .join(SETTINGS_FILE)
    }
}

fn load_internal(path: &Path) -> anyhow::Result<Settings> {
    let content = std::fs::read_to_string(path).unwrap_or_default();
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::{Geometry, Settings};
    use tempfile::tempdir;

    #[test]
    fn roundtrip_preserves_clips_and_geometry() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");
        let settings = Settings {
            geometry: Some(Geometry {
                x: 40,
                y: 60,
                width: 380,
                height: 600,
            }),
            clips: vec!["one".into(), "two".into(), "three".into()],
            debug_logging: false,
        };

        settings.save(&path).expect("save settings");
        let loaded = Settings::load(&path);
        assert_eq!(loaded.clips, settings.clips);
        assert_eq!(loaded.geometry, settings.geometry);
    }

    #[test]
    fn save_creates_missing_directories() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("more").join("settings.json");
        Settings::default().save(&path).expect("save settings");
        assert!(path.exists());
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempdir().expect("tempdir");
        let loaded = Settings::load(&dir.path().join("nope.json"));
        assert!(loaded.clips.is_empty());
        assert!(loaded.geometry.is_none());
    }

    #[test]
    fn malformed_file_loads_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").expect("write");
        let loaded = Settings::load(&path);
        assert!(loaded.clips.is_empty());
    }

    #[test]
    fn missing_keys_default_silently() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"clips":["only"]}"#).expect("write");
        let loaded = Settings::load(&path);
        assert_eq!(loaded.clips, ["only"]);
        assert!(loaded.geometry.is_none());
        assert!(!loaded.debug_logging);
    }
}
