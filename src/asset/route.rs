//! Asset route: source file → cache path → archive entry mapping.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::utils::path::{archive_name, dotted_extension, swap_extension};

/// Route information for a single file in the asset tree.
///
/// `rel` is the single source of truth for both the build-directory
/// layout and the archive entry name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRoute {
    /// Source file path (under the asset root)
    pub source: PathBuf,
    /// Path relative to the asset root (e.g. `sprites/hero.png`)
    pub rel: PathBuf,
}

impl AssetRoute {
    pub fn new(source: PathBuf, rel: PathBuf) -> Self {
        Self { source, rel }
    }

    /// Source extension with its dot (`.png`), as stored on disk
    pub fn extension(&self) -> Option<String> {
        dotted_extension(&self.rel)
    }

    /// Location of a transformed output inside the build directory
    ///
    /// `ext` replaces the source extension when given.
    pub fn cache_path(&self, build_dir: &Path, ext: Option<&str>) -> PathBuf {
        let rel = match ext {
            Some(ext) => swap_extension(&self.rel, ext),
            None => self.rel.clone(),
        };
        build_dir.join(rel)
    }

    /// Zip entry name, with `ext` substituted when the transformer changed it
    pub fn entry_name(&self, ext: Option<&str>) -> Result<String> {
        match ext {
            Some(ext) => archive_name(&swap_extension(&self.rel, ext)),
            None => archive_name(&self.rel),
        }
    }
}
