pub mod brands;

pub use brands::BrandCatalog;

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Built-in brand definitions are invalid: {source}")]
    BuiltinBrandsError { source: toml::de::Error },

    #[error("Unknown brand '{name}' (available: {available})")]
    UnknownBrand { name: String, available: String },
}

/// Directory holding the tool's configuration files.
pub fn config_dir() -> PathBuf {
    let config_dir = shellexpand::tilde("~/.config/markdown-docweave");
    PathBuf::from(config_dir.as_ref())
}

#[derive(Debug, Default, PartialEq, Deserialize)]
pub struct Config {
    /// Brand used when none is given on the command line.
    #[serde(default)]
    pub default_brand: Option<String>,
    /// Brands file to use instead of the one in the config directory.
    #[serde(default)]
    pub brands_path: Option<PathBuf>,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the brands file location
        config.brands_path = config
            .brands_path
            .map(|path| Self::expand_path(&path).unwrap_or(path));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        config_dir().join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/markdown-docweave/config.toml"));
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/brands/house.toml");
        let expanded = Config::expand_path(&path).unwrap();

        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().ends_with("brands/house.toml"));
    }

    #[test]
    fn test_expand_path_with_absolute_path() {
        let path = PathBuf::from("/absolute/brands.toml");
        let expanded = Config::expand_path(&path).unwrap();

        assert_eq!(expanded, path);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_file,
            "default_brand = \"corporate\"\nbrands_path = \"/tmp/brands.toml\"\n",
        )
        .unwrap();

        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(
            loaded_config,
            Config {
                default_brand: Some("corporate".into()),
                brands_path: Some(PathBuf::from("/tmp/brands.toml")),
            }
        );
    }

    #[test]
    fn test_brands_path_env_var_expanded_on_load() {
        unsafe {
            env::set_var("DOCWEAVE_BRANDS_ROOT", "/custom/brands");
        }

        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_file,
            "brands_path = \"$DOCWEAVE_BRANDS_ROOT/house.toml\"\n",
        )
        .unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();
        assert_eq!(
            config.brands_path,
            Some(PathBuf::from("/custom/brands/house.toml"))
        );
        assert_eq!(config.default_brand, None);

        unsafe {
            env::remove_var("DOCWEAVE_BRANDS_ROOT");
        }
    }

    #[test]
    fn test_invalid_config_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "default_brand = [1, 2]\n").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
    }
}
