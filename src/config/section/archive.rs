//! `[archive]` section configuration.
//!
//! ```toml
//! [archive]
//! level = 9   # deflate level 0-9, omit for the zip default
//! ```

use serde::Deserialize;

use crate::config::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ArchiveConfig {
    /// Deflate compression level.
    pub level: Option<i32>,
}

impl ArchiveConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.level {
            Some(level) if !(0..=9).contains(&level) => Err(ConfigError::Validation(format!(
                "archive.level must be between 0 and 9, got {level}"
            ))),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_range() {
        assert!(ArchiveConfig { level: None }.validate().is_ok());
        assert!(ArchiveConfig { level: Some(9) }.validate().is_ok());
        assert!(ArchiveConfig { level: Some(10) }.validate().is_err());
        assert!(ArchiveConfig { level: Some(-1) }.validate().is_err());
    }
}
