use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{Result, anyhow};

use crate::geo::LocationData;
use crate::language::Language;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
    pub language: Option<Language>,
    /// Voice capability: "simulated" (default) or "off".
    pub voice: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub reply_delay_ms: Option<u64>,
}

impl Config {
    pub fn new() -> Self {
        Self {
            language: None,
            voice: None,
            latitude: None,
            longitude: None,
            city: None,
            state: None,
            reply_delay_ms: None,
        }
    }

    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let config_content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_content)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let config_content = serde_json::to_string_pretty(self)?;
        fs::write(path, config_content)?;
        Ok(())
    }

    pub fn save_language(language: Language) -> Result<()> {
        let mut config = Self::load().unwrap_or_else(|_| Self::new());
        config.language = Some(language);
        config.save()
    }

    /// Fixed coordinates make the location capability available; both
    /// must be present for a fix to exist.
    pub fn location(&self) -> Option<LocationData> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(LocationData {
                latitude,
                longitude,
                city: self.city.clone(),
                state: self.state.clone(),
            }),
            _ => None,
        }
    }

    fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow!("Could not determine config directory"))?;

        Ok(config_dir.join("bhujal").join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = Config::load_from(&path).unwrap();
        assert!(config.language.is_none());
        assert!(config.location().is_none());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config::new();
        config.language = Some(Language::Hi);
        config.latitude = Some(18.5204);
        config.longitude = Some(73.8567);
        config.city = Some("Pune".to_string());
        config.reply_delay_ms = Some(250);
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.language, Some(Language::Hi));
        assert_eq!(loaded.reply_delay_ms, Some(250));
        let location = loaded.location().unwrap();
        assert_eq!(location.city.as_deref(), Some("Pune"));
    }

    #[test]
    fn test_location_needs_both_coordinates() {
        let mut config = Config::new();
        config.latitude = Some(28.6);
        assert!(config.location().is_none());
        config.longitude = Some(77.2);
        assert!(config.location().is_some());
    }
}
