//! Configuration file handling for the expenses CLI.
//!
//! The configuration file is stored at `$EXPENSES_HOME/config.json` and holds the base URL of
//! the expenses API server.

use crate::{utils, Result};
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

const APP_NAME: &str = "expenses";
const CONFIG_VERSION: u8 = 1;
const CONFIG_JSON: &str = "config.json";

/// The `Config` object represents the configuration of the app. You instantiate it by
/// providing the path to `$EXPENSES_HOME` and from there it loads
/// `$EXPENSES_HOME/config.json`.
#[derive(Debug, Clone)]
pub struct Config {
    root: PathBuf,
    config_path: PathBuf,
    config_file: ConfigFile,
    api_url: Url,
}

impl Config {
    /// Creates the data directory and an initial `config.json` pointing at `api_url`.
    ///
    /// # Arguments
    /// - `dir` - The directory that will be the root of the data directory, e.g.
    ///   `$HOME/expenses`
    /// - `api_url` - The base URL of the expenses API server, e.g. `http://localhost:4000`
    ///
    /// # Errors
    /// - Returns an error if `api_url` does not parse as a URL or if any file operation fails.
    pub async fn create(dir: impl Into<PathBuf>, api_url: &str) -> Result<Self> {
        // Validate the URL before touching the filesystem
        let parsed = Url::parse(api_url).with_context(|| format!("Invalid API URL '{api_url}'"))?;

        // Create the directory if it does not exist
        let maybe_relative = dir.into();
        utils::make_dir(&maybe_relative)
            .await
            .context("Unable to create the expenses home directory")?;

        // Canonicalize the directory path
        let root = utils::canonicalize(&maybe_relative).await?;

        // Create and save an initial ConfigFile in the data directory
        let config_path = root.join(CONFIG_JSON);
        let config_file = ConfigFile {
            app_name: APP_NAME.to_string(),
            config_version: CONFIG_VERSION,
            api_url: api_url.to_string(),
        };
        config_file.save(&config_path).await?;

        Ok(Self {
            root,
            config_path,
            config_file,
            api_url: parsed,
        })
    }

    /// This will
    /// - validate that the expenses home exists and that the config file exists
    /// - load the config file and parse the API URL
    /// - return the loaded configuration object
    pub async fn load(home: impl Into<PathBuf>) -> Result<Self> {
        let maybe_relative = home.into();
        let root = utils::canonicalize(&maybe_relative)
            .await
            .context("Expenses home is missing, run 'expenses init' first")?;

        let config_path = root.join(CONFIG_JSON);
        if !config_path.is_file() {
            bail!("The config file is missing '{}'", config_path.display())
        }
        let config_file = ConfigFile::load(&config_path).await?;

        let api_url = Url::parse(&config_file.api_url).with_context(|| {
            format!("Invalid API URL in config file: '{}'", config_file.api_url)
        })?;

        Ok(Self {
            root,
            config_path,
            config_file,
            api_url,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }
}

/// Represents the serialization and deserialization format of the configuration file.
///
/// Example configuration:
/// ```json
/// {
///   "app_name": "expenses",
///   "config_version": 1,
///   "api_url": "http://localhost:4000"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
struct ConfigFile {
    /// Application name, should always be "expenses"
    app_name: String,

    /// Configuration file version
    config_version: u8,

    /// Base URL of the expenses API server
    api_url: String,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            config_version: CONFIG_VERSION,
            api_url: String::new(),
        }
    }
}

impl ConfigFile {
    /// Loads a ConfigFile asynchronously from the specified path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = utils::read(path).await?;

        let config: ConfigFile = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

        // Validate app_name
        anyhow::ensure!(
            config.app_name == APP_NAME,
            "Invalid app_name in config file: expected '{}', got '{}'",
            APP_NAME,
            config.app_name
        );

        Ok(config)
    }

    /// Saves the ConfigFile to the specified path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let p = path.as_ref();
        let data = serde_json::to_string_pretty(self).context("Unable to serialize config")?;
        utils::write(p, data)
            .await
            .context("Unable to write config file")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_config_create() {
        let dir = TempDir::new().unwrap();
        let home_dir = dir.path().join("expenses_home");
        let api_url = "http://localhost:4000";

        // Run the function under test:
        let config = Config::create(&home_dir, api_url).await.unwrap();

        // Check some values on the config object
        assert_eq!("http://localhost:4000/", config.api_url().as_str());
        assert!(config.config_path().is_file());
    }

    #[tokio::test]
    async fn test_config_create_and_load() {
        let dir = TempDir::new().unwrap();
        let home_dir = dir.path().join("expenses_home");
        let api_url = "https://expenses.example.com/api";

        let created = Config::create(&home_dir, api_url).await.unwrap();
        let loaded = Config::load(&home_dir).await.unwrap();

        assert_eq!(created.api_url(), loaded.api_url());
        assert_eq!(created.root(), loaded.root());
    }

    #[tokio::test]
    async fn test_config_create_rejects_a_bad_url() {
        let dir = TempDir::new().unwrap();
        let home_dir = dir.path().join("expenses_home");
        let result = Config::create(&home_dir, "not a url").await;
        assert!(result.is_err());
        // The directory is not created when validation fails
        assert!(!home_dir.exists());
    }

    #[tokio::test]
    async fn test_config_load_missing_home_is_an_error() {
        let dir = TempDir::new().unwrap();
        let home_dir = dir.path().join("does_not_exist");
        assert!(Config::load(&home_dir).await.is_err());
    }

    #[tokio::test]
    async fn test_config_file_load_invalid_app_name() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.json");

        let json = r#"{
            "app_name": "wrong_app",
            "config_version": 1,
            "api_url": "http://localhost:4000"
        }"#;
        utils::write(&config_path, json).await.unwrap();

        let result = ConfigFile::load(&config_path).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid app_name"));
    }

    #[tokio::test]
    async fn test_config_file_save_and_load() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.json");

        let original = ConfigFile {
            app_name: APP_NAME.to_string(),
            config_version: CONFIG_VERSION,
            api_url: "http://localhost:4000".to_string(),
        };
        original.save(&config_path).await.unwrap();

        let loaded = ConfigFile::load(&config_path).await.unwrap();
        assert_eq!(original, loaded);
    }
}
