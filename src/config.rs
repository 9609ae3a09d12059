//! Run configuration, optionally read from a TOML file.
//!
//! Every field has a default, so an empty file (or no file at all) is a
//! valid configuration. CLI flags override whatever the file provided.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Error, Result, DEFAULT_BASIC_URL, DEFAULT_DIR_STORAGE, DEFAULT_DOWNLOAD_LIMIT};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Archive origin; page URLs are formed as `{basic_url}/{page_number}`.
    pub basic_url: String,
    /// Specific page URL to resume from. The archive origin when unset.
    pub start_url: Option<String>,
    /// Local mirror root. Created at startup if absent.
    pub dir_storage: PathBuf,
    /// Maximum number of successful downloads in one run.
    pub download_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            basic_url: DEFAULT_BASIC_URL.to_string(),
            start_url: None,
            dir_storage: PathBuf::from(DEFAULT_DIR_STORAGE),
            download_limit: DEFAULT_DOWNLOAD_LIMIT,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file. Missing fields fall back to
    /// their defaults; an unreadable or invalid file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config)
    }

    /// The URL the traversal starts from.
    pub fn start_url(&self) -> &str {
        self.start_url.as_deref().unwrap_or(&self.basic_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.basic_url, DEFAULT_BASIC_URL);
        assert_eq!(config.start_url, None);
        assert_eq!(config.dir_storage, PathBuf::from(DEFAULT_DIR_STORAGE));
        assert_eq!(config.download_limit, DEFAULT_DOWNLOAD_LIMIT);
    }

    #[test]
    fn file_values_override_defaults() {
        let config: Config = toml::from_str(
            r#"
            basic_url = "https://comics.example"
            start_url = "https://comics.example/777"
            dir_storage = "mirror"
            download_limit = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.basic_url, "https://comics.example");
        assert_eq!(config.start_url(), "https://comics.example/777");
        assert_eq!(config.dir_storage, PathBuf::from("mirror"));
        assert_eq!(config.download_limit, 10);
    }

    #[test]
    fn start_url_falls_back_to_origin() {
        let config = Config::default();
        assert_eq!(config.start_url(), DEFAULT_BASIC_URL);
    }
}
