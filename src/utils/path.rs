//! Path helpers for archive entry names and extension rewriting.
//!
//! Pure functions for path manipulation. No side effects.

use std::path::{Component, Path, PathBuf};

use anyhow::{Result, anyhow};

/// Extension of a path including the leading dot, exactly as stored
///
/// # Examples
/// ```ignore
/// assert_eq!(dotted_extension(Path::new("ui/hero.png")), Some(".png".into()));
/// assert_eq!(dotted_extension(Path::new("ui/HERO.PNG")), Some(".PNG".into()));
/// assert_eq!(dotted_extension(Path::new("Makefile")), None);
/// ```
pub fn dotted_extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
}

/// Replace the extension of `path` with `ext` (given with its leading dot)
///
/// The directory portion and file stem are preserved.
pub fn swap_extension(path: &Path, ext: &str) -> PathBuf {
    path.with_extension(ext.trim_start_matches('.'))
}

/// Check if a file name marks a hidden file (e.g. `.DS_Store`)
#[inline]
pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.')
}

/// Convert a path relative to the asset root into a zip entry name
///
/// Components are joined with `/` regardless of platform.
pub fn archive_name(rel: &Path) -> Result<String> {
    let mut parts = Vec::new();
    for component in rel.components() {
        match component {
            Component::Normal(part) => parts.push(
                part.to_str()
                    .ok_or_else(|| anyhow!("Non UTF-8 path in asset tree: {}", rel.display()))?,
            ),
            Component::CurDir => {}
            _ => return Err(anyhow!("Path escapes the asset root: {}", rel.display())),
        }
    }
    Ok(parts.join("/"))
}
