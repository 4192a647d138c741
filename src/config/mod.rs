//! Packer configuration loaded from `pack_assets.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                      |
//! |-------------|----------------------------------------------|
//! | `[texture]` | Compressor command line and output extension |
//! | `[archive]` | Deflate level                                |
//!
//! Every field has a default, so the file is optional.

mod error;
pub mod section;

pub use error::ConfigError;
pub use section::{ArchiveConfig, TextureConfig};

use crate::{cli::Cli, log};
use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::Path};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "pack_assets.toml";

/// Root configuration structure representing pack_assets.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PackConfig {
    /// Texture compressor settings
    pub texture: TextureConfig,

    /// Archive output settings
    pub archive: ArchiveConfig,
}

impl PackConfig {
    /// Load configuration for a CLI invocation and apply command-line overrides.
    ///
    /// An explicit `--config` path must exist; the default file is optional.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::from_path(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_path(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };

        if cli.no_texture {
            config.texture.enable = false;
        }

        Ok(config)
    }

    /// Load configuration from file path, warning about unknown fields.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse(&content)?;
        if !ignored.is_empty() {
            log!("warning"; "unknown fields in {} ignored: {}", path.display(), ignored.join(", "));
        }
        Ok(config)
    }

    /// Parse and validate TOML, returning the paths of ignored unknown fields.
    fn parse(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config: Self = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        config.validate()?;
        Ok((config, ignored))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.texture.validate()?;
        self.archive.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(content: &str) -> Result<PackConfig, ConfigError> {
        PackConfig::parse(content).map(|(config, _)| config)
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config, PackConfig::default());
        assert!(config.texture.enable);
        assert_eq!(config.texture.extension, ".ktx");
    }

    #[test]
    fn test_parse_sections() {
        let config = parse(
            r#"
            [texture]
            command = ["basisu", "$INPUT", "-output_file", "$OUTPUT"]
            extension = ".basis"

            [archive]
            level = 9
            "#,
        )
        .unwrap();

        assert_eq!(config.texture.program(), Some("basisu"));
        assert_eq!(config.texture.extension, ".basis");
        assert!(config.texture.enable);
        assert_eq!(config.archive.level, Some(9));
    }

    #[test]
    fn test_invalid_toml() {
        let err = parse("[texture\nenable = ").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_validation_runs_on_parse() {
        let err = parse("[archive]\nlevel = 42").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_unknown_fields_are_collected() {
        let (_, ignored) =
            PackConfig::parse("[texture]\nquality = 3\n[extra]\nx = 1").unwrap();
        assert_eq!(ignored.len(), 2);
        assert!(ignored.iter().any(|f| f == "texture.quality"));
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = PackConfig::from_path(&dir.path().join("pack_assets.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(..)));
    }

    #[test]
    fn test_from_path_reads_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pack_assets.toml");
        std::fs::write(&path, "[texture]\nenable = false\n").unwrap();

        let config = PackConfig::from_path(&path).unwrap();
        assert!(!config.texture.enable);
    }
}
