//! Asset tree scanning (pure, no side effects).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use jwalk::{Parallelism, WalkDir};

use crate::utils::path::is_hidden_name;

use super::AssetRoute;

/// Result of walking the asset root
#[derive(Debug, Default)]
pub struct AssetScan {
    /// Files to pack, in traversal order
    pub routes: Vec<AssetRoute>,
    /// Hidden files and files under excluded paths that were left out
    pub skipped: usize,
}

/// Walk the asset root and collect every regular file
///
/// ```text
/// assets/
/// ├── .DS_Store            -> (hidden, skipped)
/// ├── music.ogg            -> music.ogg
/// └── sprites/
///     ├── hero.png         -> sprites/hero.png
///     └── hero.xml         -> sprites/hero.xml
/// ```
///
/// Only the file name is checked for the hidden marker; hidden directories
/// are still descended into. Files under any `exclude` path that lies inside
/// the root (the build cache, the archive being written) are left out too.
/// The walk is serial so entries come back in plain traversal order. Read
/// errors abort the scan.
pub fn scan_assets(root: &Path, exclude: &[&Path]) -> Result<AssetScan> {
    if !root.is_dir() {
        bail!("Asset folder {} is not a directory", root.display());
    }

    let excluded = excluded_rels(root, exclude)?;
    let mut scan = AssetScan::default();
    let walker = WalkDir::new(root)
        .parallelism(Parallelism::Serial)
        .skip_hidden(false)
        .follow_links(true);

    for entry in walker {
        let entry =
            entry.with_context(|| format!("Failed to walk asset folder {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if is_hidden_name(&name) {
            scan.skipped += 1;
            continue;
        }

        let source = entry.path();
        let rel = source.strip_prefix(root)?.to_path_buf();
        if excluded.iter().any(|ex| rel.starts_with(ex)) {
            scan.skipped += 1;
            continue;
        }
        scan.routes.push(AssetRoute::new(source, rel));
    }

    Ok(scan)
}

/// Root-relative forms of the existing `exclude` paths that sit under `root`
fn excluded_rels(root: &Path, exclude: &[&Path]) -> Result<Vec<PathBuf>> {
    let root = fs::canonicalize(root)
        .with_context(|| format!("Failed to resolve asset folder {}", root.display()))?;

    Ok(exclude
        .iter()
        .filter_map(|path| fs::canonicalize(path).ok())
        .filter_map(|path| path.strip_prefix(&root).ok().map(Path::to_path_buf))
        .filter(|rel| !rel.as_os_str().is_empty())
        .collect())
}
