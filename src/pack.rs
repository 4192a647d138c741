//! Packing pipeline: scan -> transform-or-copy -> archive.
//!
//! Runs sequentially on one thread. Any error other than a compressor
//! failure aborts the run and discards the unfinished archive.

use std::path::Path;

use anyhow::Result;

use crate::archive::ArchiveWriter;
use crate::asset::{process_asset, scan_assets};
use crate::config::PackConfig;
use crate::debug;
use crate::freshness::get_mtime;
use crate::transform::TransformContext;

/// Counts reported after a successful run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PackSummary {
    /// Entries copied straight from the asset root
    pub copied: usize,
    /// Entries taken from the build directory
    pub transformed: usize,
    /// Hidden files, plus build cache or archive files found under the asset root
    pub skipped: usize,
}

impl PackSummary {
    pub fn entries(&self) -> usize {
        self.copied + self.transformed
    }
}

/// Pack every non-hidden file under `assets_dir` into `archive_path`.
///
/// Transformer outputs are cached under `build_dir`, mirroring the asset tree.
/// On error no archive is left at `archive_path`, not even one from an
/// earlier run.
pub fn pack(
    assets_dir: &Path,
    archive_path: &Path,
    build_dir: &Path,
    config: &PackConfig,
) -> Result<PackSummary> {
    let mut archive = ArchiveWriter::create(archive_path, config.archive.level)?;

    match write_entries(&mut archive, assets_dir, archive_path, build_dir, config) {
        Ok(summary) => {
            archive.finish()?;
            Ok(summary)
        }
        Err(err) => {
            archive.discard();
            Err(err)
        }
    }
}

fn write_entries(
    archive: &mut ArchiveWriter,
    assets_dir: &Path,
    archive_path: &Path,
    build_dir: &Path,
    config: &PackConfig,
) -> Result<PackSummary> {
    let scan = scan_assets(assets_dir, &[build_dir, archive_path, archive.partial()])?;
    debug!("pack"; "found {} files under {}", scan.routes.len(), assets_dir.display());

    let packer_mtime = std::env::current_exe().ok().and_then(|exe| get_mtime(&exe));
    let ctx = TransformContext {
        texture: &config.texture,
        packer_mtime,
    };

    let mut summary = PackSummary {
        skipped: scan.skipped,
        ..Default::default()
    };
    for route in &scan.routes {
        let packed = process_asset(&ctx, route, build_dir)?;
        debug!("pack"; "{} <- {}", packed.name, packed.path.display());
        archive.add_file(&packed.name, &packed.path)?;

        if packed.transformed {
            summary.transformed += 1;
        } else {
            summary.copied += 1;
        }
    }
    Ok(summary)
}
