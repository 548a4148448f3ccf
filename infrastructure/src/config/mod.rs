//! Configuration loading with multi-source merging

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Connection settings for the tool execution service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolServiceConfig {
    /// Base URL the tool endpoints are appended to
    pub base_url: String,
    /// Bearer credential sent on every dispatch
    pub api_key: String,
}

/// Connection settings for the hosted practice backend
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PracticeServiceConfig {
    /// Base URL of the relational backend's REST surface
    pub base_url: String,
    /// Bearer credential for the backend
    pub api_key: String,
}

/// Root configuration file model
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub tools: ToolServiceConfig,
    pub practice: PracticeServiceConfig,
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `JURIS_`-prefixed environment variables
    ///    (`JURIS_TOOLS__BASE_URL`, `JURIS_TOOLS__API_KEY`, ...)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./juris.toml` or `./.juris.toml`
    /// 4. Global: `~/.config/juris/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        for filename in &["juris.toml", ".juris.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
                break;
            }
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed("JURIS_").split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("juris").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        for filename in &["juris.toml", ".juris.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                return Some(path);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_defaults_is_unconfigured() {
        let config = ConfigLoader::load_defaults();
        assert!(config.tools.base_url.is_empty());
        assert!(config.tools.api_key.is_empty());
        assert!(config.practice.base_url.is_empty());
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("juris"));
    }

    #[test]
    fn test_file_config_deserializes_partial_toml() {
        let config: FileConfig = toml::from_str(
            r#"
            [tools]
            base_url = "https://tools.example.com/api"
            "#,
        )
        .unwrap();

        assert_eq!(config.tools.base_url, "https://tools.example.com/api");
        assert!(config.tools.api_key.is_empty());
        assert!(config.practice.base_url.is_empty());
    }
}
