//! Texture atlas compaction.
//!
//! Atlas descriptions are scanned leniently, not parsed as XML. From each
//! line only the first `name=...` run up to the next `/` survives:
//!
//! ```text
//! <SubTexture name="hero_idle.png" x="0" y="0" width="32" height="32"/>
//!   -> name="hero_idle.png" x="0" y="0" width="32" height="32"
//! ```

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;

use super::{TransformContext, TransformError};
use crate::debug;
use crate::freshness::{get_mtime, is_output_fresh, newest_mtime};
use crate::utils::path::dotted_extension;

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"name=[^/]*").unwrap());

/// Compact `source` into `dest`, keeping the extension.
///
/// The same-named `.png` must sit next to the atlas. An existing `dest` no
/// older than the source and the packer is reused.
pub fn transform(ctx: &TransformContext<'_>, source: &Path, dest: &Path) -> Result<Option<String>> {
    let image = source.with_extension("png");
    if !image.is_file() {
        return Err(TransformError::MissingAtlasImage {
            atlas: source.to_path_buf(),
            image,
        }
        .into());
    }

    if is_output_fresh(dest, newest_mtime([get_mtime(source), ctx.packer_mtime])) {
        debug!("cache"; "reusing {}", dest.display());
        return Ok(dotted_extension(source));
    }

    let content = fs::read_to_string(source)
        .with_context(|| format!("Failed to read atlas {}", source.display()))?;
    let compact = compact_atlas(&content);
    fs::write(dest, &compact)
        .with_context(|| format!("Failed to write {}", dest.display()))?;

    debug!("atlas"; "{} -> {} bytes", source.display(), compact.len());
    Ok(dotted_extension(source))
}

/// Keep the `name=` token of every line, newline-joined in file order
pub fn compact_atlas(content: &str) -> String {
    content
        .lines()
        .filter_map(|line| NAME_RE.find(line))
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
