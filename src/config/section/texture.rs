//! `[texture]` section configuration.
//!
//! External texture compressor used for `.png` files.
//!
//! # Example
//!
//! ```toml
//! [texture]
//! enable = true
//! command = ["crunch", "-fileformat", "ktx", "-ETC1", "-quality", "255",
//!            "-file", "$INPUT", "-out", "$OUTPUT"]
//! extension = ".ktx"
//! ```
//!
//! `$INPUT` is replaced with the source texture and `$OUTPUT` with the
//! cache file the compressor must write.

use serde::Deserialize;

use crate::config::ConfigError;

/// Placeholder for the source texture path.
pub const INPUT_VAR: &str = "INPUT";
/// Placeholder for the compressed output path.
pub const OUTPUT_VAR: &str = "OUTPUT";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TextureConfig {
    /// Run the compressor at all. When false, textures are packed as-is.
    pub enable: bool,

    /// Program followed by its arguments.
    pub command: Vec<String>,

    /// Extension (with dot) of the files the compressor produces.
    pub extension: String,
}

impl Default for TextureConfig {
    fn default() -> Self {
        Self {
            enable: true,
            command: [
                "crunch",
                "-fileformat",
                "ktx",
                "-ETC1",
                "-quality",
                "255",
                "-file",
                "$INPUT",
                "-out",
                "$OUTPUT",
            ]
            .map(String::from)
            .to_vec(),
            extension: ".ktx".to_string(),
        }
    }
}

impl TextureConfig {
    /// Compressor program name (first element of `command`).
    pub fn program(&self) -> Option<&str> {
        self.command.first().map(String::as_str)
    }

    /// Compressor arguments, placeholders unresolved.
    pub fn args(&self) -> &[String] {
        self.command.get(1..).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.extension.starts_with('.') || self.extension.len() < 2 {
            return Err(ConfigError::Validation(format!(
                "texture.extension must look like \".ktx\", got {:?}",
                self.extension
            )));
        }
        if self.enable && self.program().is_none_or(str::is_empty) {
            return Err(ConfigError::Validation(
                "texture.command must name a program when texture.enable = true".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command() {
        let config = TextureConfig::default();
        assert_eq!(config.program(), Some("crunch"));
        assert!(config.args().iter().any(|a| a == "$INPUT"));
        assert!(config.args().iter().any(|a| a == "$OUTPUT"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_extension_needs_dot() {
        let config = TextureConfig {
            extension: "ktx".into(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_empty_command_only_fails_when_enabled() {
        let mut config = TextureConfig {
            command: vec![],
            ..Default::default()
        };
        assert!(config.validate().is_err());

        config.enable = false;
        assert!(config.validate().is_ok());
        assert_eq!(config.args(), &[] as &[String]);
    }
}
