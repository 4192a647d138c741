//! Transform-or-copy decision for a single asset (side effects in the build directory).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::transform::{self, TransformContext};

use super::AssetRoute;

/// What goes into the archive for one asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedAsset {
    /// Zip entry name, relative to the asset root
    pub name: String,
    /// File whose bytes become the entry (source or cached output)
    pub path: PathBuf,
    /// Whether `path` is a transformer output
    pub transformed: bool,
}

/// Run the registered transformer for `route`, if any.
///
/// Falls back to the untouched source when no transformer matches the
/// extension or the transformer produced nothing.
pub fn process_asset(
    ctx: &TransformContext<'_>,
    route: &AssetRoute,
    build_dir: &Path,
) -> Result<PackedAsset> {
    let transformer = route.extension().as_deref().and_then(transform::lookup);

    if let Some(transform) = transformer {
        let dest = route.cache_path(build_dir, None);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        if let Some(ext) = transform(ctx, &route.source, &dest)? {
            return Ok(PackedAsset {
                name: route.entry_name(Some(&ext))?,
                path: route.cache_path(build_dir, Some(&ext)),
                transformed: true,
            });
        }
    }

    Ok(PackedAsset {
        name: route.entry_name(None)?,
        path: route.source.clone(),
        transformed: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TextureConfig;
    use tempfile::TempDir;

    fn no_compressor() -> TextureConfig {
        TextureConfig {
            command: vec!["pack-assets-no-such-compressor".into()],
            ..Default::default()
        }
    }

    fn route(root: &Path, rel: &str) -> AssetRoute {
        AssetRoute::new(root.join(rel), PathBuf::from(rel))
    }

    #[test]
    fn test_unregistered_extension_is_copied() {
        let dir = TempDir::new().unwrap();
        let assets = dir.path().join("assets");
        let build = dir.path().join("build");
        fs::create_dir_all(assets.join("audio")).unwrap();
        fs::write(assets.join("audio/music.ogg"), "ogg").unwrap();

        let texture = no_compressor();
        let ctx = TransformContext { texture: &texture, packer_mtime: None };
        let packed = process_asset(&ctx, &route(&assets, "audio/music.ogg"), &build).unwrap();

        assert_eq!(packed.name, "audio/music.ogg");
        assert_eq!(packed.path, assets.join("audio/music.ogg"));
        assert!(!packed.transformed);
        assert!(!build.exists());
    }

    #[test]
    fn test_atlas_is_read_from_cache() {
        let dir = TempDir::new().unwrap();
        let assets = dir.path().join("assets");
        let build = dir.path().join("build");
        fs::create_dir_all(assets.join("ui")).unwrap();
        fs::write(assets.join("ui/atlas.xml"), "<s name=\"a\"/>\n").unwrap();
        fs::write(assets.join("ui/atlas.png"), "png").unwrap();

        let texture = no_compressor();
        let ctx = TransformContext { texture: &texture, packer_mtime: None };
        let packed = process_asset(&ctx, &route(&assets, "ui/atlas.xml"), &build).unwrap();

        assert_eq!(packed.name, "ui/atlas.xml");
        assert_eq!(packed.path, build.join("ui/atlas.xml"));
        assert!(packed.transformed);
        assert_eq!(fs::read_to_string(&packed.path).unwrap(), "name=\"a\"");
    }

    #[test]
    fn test_texture_without_compressor_falls_back() {
        let dir = TempDir::new().unwrap();
        let assets = dir.path().join("assets");
        let build = dir.path().join("build");
        fs::create_dir_all(&assets).unwrap();
        fs::write(assets.join("hero.png"), "png").unwrap();

        let texture = no_compressor();
        let ctx = TransformContext { texture: &texture, packer_mtime: None };
        let packed = process_asset(&ctx, &route(&assets, "hero.png"), &build).unwrap();

        assert_eq!(packed.name, "hero.png");
        assert_eq!(packed.path, assets.join("hero.png"));
        assert!(!packed.transformed);
    }

    #[cfg(unix)]
    #[test]
    fn test_texture_extension_applies_to_cache_and_entry() {
        let dir = TempDir::new().unwrap();
        let assets = dir.path().join("assets");
        let build = dir.path().join("build");
        fs::create_dir_all(assets.join("sprites")).unwrap();
        fs::write(assets.join("sprites/hero.png"), "png").unwrap();

        let texture = TextureConfig {
            command: vec![
                "sh".into(),
                "-c".into(),
                "printf KTX > \"$1\"".into(),
                "sh".into(),
                "$OUTPUT".into(),
            ],
            ..Default::default()
        };
        let ctx = TransformContext { texture: &texture, packer_mtime: None };
        let packed = process_asset(&ctx, &route(&assets, "sprites/hero.png"), &build).unwrap();

        assert_eq!(packed.name, "sprites/hero.ktx");
        assert_eq!(packed.path, build.join("sprites/hero.ktx"));
        assert!(packed.transformed);
    }
}
