//! Init command handler.

use crate::commands::Out;
use crate::{Config, Result};
use std::path::Path;

/// Creates the data directory and writes an initial `config.json` pointing at `api_url`.
pub async fn init(home: &Path, api_url: &str) -> Result<Out<String>> {
    let config = Config::create(home, api_url).await?;
    let message = format!(
        "Initialized expenses home at '{}' for the API at '{}'",
        config.root().display(),
        config.api_url()
    );
    Ok(Out::new_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_init_creates_the_config() {
        let dir = TempDir::new().unwrap();
        let home = dir.path().join("expenses");

        let out = init(&home, "http://localhost:4000").await.unwrap();
        assert!(out.message().contains("Initialized expenses home"));

        let config = Config::load(&home).await.unwrap();
        assert_eq!(config.api_url().as_str(), "http://localhost:4000/");
    }

    #[tokio::test]
    async fn test_init_rejects_a_bad_url() {
        let dir = TempDir::new().unwrap();
        let home = dir.path().join("expenses");
        assert!(init(&home, "not a url").await.is_err());
    }
}
