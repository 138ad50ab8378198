//! CLI configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// CLI configuration, loaded from TOML with CLI-flag overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Registry storage settings
    #[serde(default)]
    pub registry: RegistrySection,

    /// Display settings
    #[serde(default)]
    pub display: DisplaySection,
}

/// Registry storage settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrySection {
    /// Directory holding the registry collections
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for RegistrySection {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySection {
    /// CDAs per directory page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("wardbook"))
        .unwrap_or_else(|| PathBuf::from("./wardbook-data"))
}

fn default_page_size() -> usize {
    wardbook_core::DIRECTORY_PAGE_SIZE
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("wardbook").join("config.toml"))
}

impl CliConfig {
    /// Load configuration, preferring an explicit path, then the platform
    /// config dir, then built-in defaults. CLI overrides win last.
    pub fn load(path: Option<PathBuf>, data_dir: Option<PathBuf>) -> Result<Self> {
        let explicit = path.is_some();
        let path = path.or_else(default_config_path);

        let mut config = match path {
            Some(path) if path.exists() => {
                let text = fs::read_to_string(&path)
                    .with_context(|| format!("failed to read config file {}", path.display()))?;
                toml::from_str(&text)
                    .with_context(|| format!("failed to parse config file {}", path.display()))?
            }
            Some(path) if explicit => {
                anyhow::bail!("config file {} does not exist", path.display());
            }
            _ => Self::default(),
        };

        if let Some(data_dir) = data_dir {
            config.registry.data_dir = data_dir;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_minimal_config() {
        let config: CliConfig = toml::from_str(
            r#"
            [registry]
            data_dir = "/tmp/wardbook-test"
            "#,
        )
        .unwrap();

        assert_eq!(config.registry.data_dir, PathBuf::from("/tmp/wardbook-test"));
        assert_eq!(config.display.page_size, wardbook_core::DIRECTORY_PAGE_SIZE);
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config.display.page_size, 30);
    }

    #[test]
    fn cli_override_replaces_data_dir() {
        let config = CliConfig::load(None, Some(PathBuf::from("/tmp/override"))).unwrap();
        assert_eq!(config.registry.data_dir, PathBuf::from("/tmp/override"));
    }
}
