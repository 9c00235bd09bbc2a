//! Configuration management
//!
//! Tag types are declared in a `macrotag.toml` file:
//!
//! ```toml
//! [types.image]
//! attributes = ["alt", "width"]
//! template = "<img src=\"{value}\" alt=\"{alt}\">"
//!
//! [types.image.defaults]
//! width = "100"
//!
//! [options]
//! base_url = "https://example.com"
//! ```

use crate::domain::{Bag, TagRegistry, TagTypeDefinition, TemplateHandler};
use crate::error::{MacrotagError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// File name searched for when no config path is given
pub const CONFIG_FILE_NAME: &str = "macrotag.toml";

/// Environment variable overriding config discovery
pub const CONFIG_ENV_VAR: &str = "MACROTAG_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeConfig {
    #[serde(default)]
    pub attributes: Vec<String>,

    /// Placeholder template; types without one cannot be rendered
    #[serde(default)]
    pub template: Option<String>,

    #[serde(default)]
    pub defaults: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub types: BTreeMap<String, TypeConfig>,

    /// Options bag handed to every parsed tag
    #[serde(default)]
    pub options: Bag,
}

impl Config {
    /// Parse and validate config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a specific file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MacrotagError::ConfigNotFound(path.to_path_buf())
            } else {
                MacrotagError::Io(e)
            }
        })?;

        tracing::debug!(path = %path.display(), "loading config");
        Self::parse(&contents)
    }

    /// Locate and load the config file
    ///
    /// Checks the MACROTAG_CONFIG environment variable first, then searches
    /// for macrotag.toml from the current directory upwards.
    pub fn discover() -> Result<Self> {
        if let Ok(config_path) = std::env::var(CONFIG_ENV_VAR) {
            return Self::load_from_path(Path::new(&config_path));
        }

        let current_dir = std::env::current_dir()?;
        Self::load_from_path(&Self::find_from(&current_dir)?)
    }

    /// Find macrotag.toml by walking up from a starting directory
    pub fn find_from(start: &Path) -> Result<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            let candidate = current.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                return Ok(candidate);
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(MacrotagError::ConfigNotFound(start.to_path_buf())),
            }
        }
    }

    /// Build a registry holding every declared tag type
    pub fn build_registry(&self) -> TagRegistry {
        let mut registry = TagRegistry::new();

        for (name, type_config) in &self.types {
            let mut definition = TagTypeDefinition::new(name, type_config.attributes.clone());
            if let Some(template) = &type_config.template {
                definition = definition.with_handler(
                    TemplateHandler::new(template, type_config.attributes.clone())
                        .with_defaults(type_config.defaults.clone()),
                );
            }
            registry.register(definition);
        }

        registry
    }

    pub fn options(&self) -> &Bag {
        &self.options
    }

    fn validate(&self) -> Result<()> {
        for (name, type_config) in &self.types {
            if name.trim() != name.as_str() || name.is_empty() || name.contains(':') {
                return Err(MacrotagError::Config(format!(
                    "Invalid tag type name: '{}'",
                    name
                )));
            }

            for attr in &type_config.attributes {
                if attr.is_empty() || attr.contains(':') || attr.contains(char::is_whitespace) {
                    return Err(MacrotagError::Config(format!(
                        "Invalid attribute name '{}' for tag type '{}'",
                        attr, name
                    )));
                }
            }

            for key in type_config.defaults.keys() {
                if !type_config.attributes.contains(key) {
                    return Err(MacrotagError::Config(format!(
                        "Default for undeclared attribute '{}' in tag type '{}'",
                        key, name
                    )));
                }
            }
        }

        Ok(())
    }
}
