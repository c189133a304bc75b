use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Persisted client configuration.
///
/// The file holds exactly one assignment: `ACCOUNT_ID = "<token>"`. The key
/// name is part of the on-disk contract, hence the rename.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "ACCOUNT_ID", default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "sbx").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Load config from the default path, returning default if not found
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(p) => Self::load_from(&p),
            None => Ok(Self::default()),
        }
    }

    /// Load config from a specific path.
    ///
    /// A missing or unparseable file is not an error: the credential is
    /// simply unset.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content).unwrap_or_default())
    }

    /// Save config to the default path, creating parent directories
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&dir.join("config.toml"))
    }

    /// Save config to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn get_token(&self) -> Option<&str> {
        self.account_id.as_deref()
    }

    pub fn set_token(&mut self, token: &str) {
        self.account_id = Some(token.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set_token("abc123");
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.get_token(), Some("abc123"));
    }

    #[test]
    fn test_file_format_is_single_assignment() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.set_token("tok-1");
        config.save_to(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.trim(), r#"ACCOUNT_ID = "tok-1""#);
    }

    #[test]
    fn test_missing_file_loads_unset() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert!(config.get_token().is_none());
    }

    #[test]
    fn test_malformed_file_loads_unset() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not == valid toml {{").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.get_token().is_none());
    }
}
