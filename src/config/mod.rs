//! Persisted user preferences.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// TUI preferences persisted between sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Theme name: "dark" or "light"
    pub theme: String,
    /// Last selected record id in the sidebar
    pub last_record: Option<String>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            last_record: None,
        }
    }
}

impl Preferences {
    /// Get the path to the preferences file.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("riskboard").join("preferences.json"))
    }

    /// Load preferences from disk, or return defaults if not found.
    #[must_use]
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Save preferences to disk.
    pub fn save(&self) -> std::io::Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    fn save_to(&self, path: &std::path::Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prefs = Preferences::default();
        assert_eq!(prefs.theme, "dark");
        assert!(prefs.last_record.is_none());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");

        let prefs = Preferences {
            theme: "light".to_string(),
            last_record: Some("E".to_string()),
        };
        prefs.save_to(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let loaded: Preferences = serde_json::from_str(&content).unwrap();
        assert_eq!(loaded.theme, "light");
        assert_eq!(loaded.last_record.as_deref(), Some("E"));
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let loaded: Preferences = serde_json::from_str("{\"theme\": \"light\"}").unwrap();
        assert_eq!(loaded.theme, "light");
        assert!(loaded.last_record.is_none());
    }
}
