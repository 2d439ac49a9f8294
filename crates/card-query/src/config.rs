use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{QueryError, Result};

pub const SEARCH_CONFIG_FILENAME: &str = "search.json";
pub const SEARCH_CONFIG_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub version: String,
    /// Display name of the search provider.
    pub provider_name: String,
    /// Keys of built-in filters that should not be registered.
    #[serde(default)]
    pub disabled_filters: Vec<String>,
    /// Catalog size at which filtering runs in parallel.
    pub parallel_threshold: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            version: SEARCH_CONFIG_VERSION.to_string(),
            provider_name: "Card search".to_string(),
            disabled_filters: Vec::new(),
            parallel_threshold: 4_096,
        }
    }
}

impl SearchConfig {
    pub fn is_filter_disabled(&self, key: &str) -> bool {
        self.disabled_filters.iter().any(|disabled| disabled == key)
    }
}

pub fn load_or_create_search_config(dir: &Path) -> Result<SearchConfig> {
    std::fs::create_dir_all(dir).map_err(|source| QueryError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = search_config_path(dir);
    if !path.exists() {
        let config = SearchConfig::default();
        write_search_config(&path, &config)?;
        log::info!("created default search config at {}", path.display());
        return Ok(config);
    }

    let data = std::fs::read_to_string(&path).map_err(|source| QueryError::Io {
        path: path.clone(),
        source,
    })?;
    let config: SearchConfig = serde_json::from_str(&data).map_err(|error| {
        QueryError::Config(format!(
            "failed to parse search config {}: {error}",
            path.display()
        ))
    })?;

    if config.version != SEARCH_CONFIG_VERSION {
        return Err(QueryError::Config(format!(
            "unsupported search config version {} in {}",
            config.version,
            path.display()
        )));
    }

    Ok(config)
}

pub fn search_config_path(dir: &Path) -> PathBuf {
    dir.join(SEARCH_CONFIG_FILENAME)
}

fn write_search_config(path: &Path, config: &SearchConfig) -> Result<()> {
    let data = serde_json::to_string_pretty(config).map_err(|error| {
        QueryError::Config(format!(
            "failed to serialize search config {}: {error}",
            path.display()
        ))
    })?;
    std::fs::write(path, data).map_err(|source| QueryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_default_config_on_first_load() {
        let dir = tempdir().expect("tempdir");
        let config = load_or_create_search_config(dir.path()).expect("load");
        assert_eq!(config, SearchConfig::default());
        assert!(search_config_path(dir.path()).exists());

        let reloaded = load_or_create_search_config(dir.path()).expect("reload");
        assert_eq!(reloaded, config);
    }

    #[test]
    fn reads_existing_config() {
        let dir = tempdir().expect("tempdir");
        std::fs::write(
            search_config_path(dir.path()),
            r#"{
                "version": "1.0.0",
                "provider_name": "Collection",
                "disabled_filters": ["faces"],
                "parallel_threshold": 10
            }"#,
        )
        .expect("write");

        let config = load_or_create_search_config(dir.path()).expect("load");
        assert_eq!(config.provider_name, "Collection");
        assert!(config.is_filter_disabled("faces"));
        assert!(!config.is_filter_disabled("type"));
        assert_eq!(config.parallel_threshold, 10);
    }

    #[test]
    fn rejects_malformed_config() {
        let dir = tempdir().expect("tempdir");
        std::fs::write(search_config_path(dir.path()), "{ not json").expect("write");
        assert!(matches!(
            load_or_create_search_config(dir.path()),
            Err(QueryError::Config(_))
        ));
    }

    #[test]
    fn rejects_unknown_version() {
        let dir = tempdir().expect("tempdir");
        let config = SearchConfig {
            version: "9.9.9".to_string(),
            ..SearchConfig::default()
        };
        std::fs::write(
            search_config_path(dir.path()),
            serde_json::to_string(&config).expect("serialize"),
        )
        .expect("write");
        assert!(matches!(
            load_or_create_search_config(dir.path()),
            Err(QueryError::Config(message)) if message.contains("9.9.9")
        ));
    }
}
