//! Per-extension asset transformers.
//!
//! The registry is a fixed table from extension (with dot, case-sensitive)
//! to a transform function. Every transformer shares one contract:
//!
//! ```text
//! (context, source, cache destination) -> Ok(Some(ext))  output written at `dest` with `ext`
//!                                      -> Ok(None)       nothing produced, pack the source
//!                                      -> Err(_)         abort the run
//! ```
//!
//! The caller creates the parent directories of `dest` before dispatching.

pub mod atlas;
pub mod texture;

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::Result;
use thiserror::Error;

use crate::config::TextureConfig;

/// Shared inputs for every transformer in one packing run.
#[derive(Debug, Clone, Copy)]
pub struct TransformContext<'a> {
    /// Texture compressor settings
    pub texture: &'a TextureConfig,
    /// Mtime of the running packer executable (cache invalidation)
    pub packer_mtime: Option<SystemTime>,
}

/// Signature shared by every registered transformer.
pub type TransformFn = fn(&TransformContext<'_>, &Path, &Path) -> Result<Option<String>>;

/// Fixed extension -> transformer table.
pub const TRANSFORMERS: &[(&str, TransformFn)] =
    &[(".png", texture::transform), (".xml", atlas::transform)];

/// Find the transformer registered for `ext` (exact match, no case folding).
pub fn lookup(ext: &str) -> Option<TransformFn> {
    TRANSFORMERS
        .iter()
        .find(|(registered, _)| *registered == ext)
        .map(|(_, transform)| *transform)
}

/// Transformer failures that abort packing.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("texture atlas `{}` has no companion image `{}`", .atlas.display(), .image.display())]
    MissingAtlasImage { atlas: PathBuf, image: PathBuf },
}
