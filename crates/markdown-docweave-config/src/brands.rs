use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use markdown_docweave_engine::BrandConfig;
use serde::Deserialize;

use crate::ConfigError;

const BUILTIN_BRANDS: &str = include_str!("../defaults/brands.toml");

#[derive(Debug, Default, Deserialize)]
struct BrandFile {
    #[serde(default)]
    brands: BTreeMap<String, BrandConfig>,
}

/// Named brands available for publishing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrandCatalog {
    brands: BTreeMap<String, BrandConfig>,
}

impl BrandCatalog {
    /// The brands shipped with the tool.
    pub fn builtin() -> Result<Self, ConfigError> {
        let file: BrandFile = toml::from_str(BUILTIN_BRANDS)
            .map_err(|source| ConfigError::BuiltinBrandsError { source })?;
        Ok(Self { brands: file.brands })
    }

    /// Built-in brands overlaid with the user's brands file, if it exists.
    pub fn load(brands_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut catalog = Self::builtin()?;
        let path = brands_path.map_or_else(Self::brands_path, Path::to_path_buf);
        catalog.overlay_from_path(&path)?;
        Ok(catalog)
    }

    /// Replaces or adds every brand defined in the file at `path`. A missing
    /// file is not an error. Returns how many brands the file defined.
    pub fn overlay_from_path<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(0);
        }

        let content =
            std::fs::read_to_string(path).map_err(|source| ConfigError::ConfigReadError {
                config_path: path.to_path_buf(),
                source,
            })?;
        let file: BrandFile =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: path.to_path_buf(),
                source,
            })?;

        let count = file.brands.len();
        self.brands.extend(file.brands);
        Ok(count)
    }

    pub fn get(&self, name: &str) -> Result<&BrandConfig, ConfigError> {
        self.brands
            .get(name)
            .ok_or_else(|| ConfigError::UnknownBrand {
                name: name.to_string(),
                available: self.names().collect::<Vec<_>>().join(", "),
            })
    }

    /// Brand names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.brands.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.brands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.brands.is_empty()
    }

    /// Default location of the user's brands file.
    pub fn brands_path() -> PathBuf {
        crate::config_dir().join("brands.toml")
    }
}
