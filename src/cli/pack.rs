//! `pack_assets` command: resolve paths, prepare the cache and run the pipeline.

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use crate::cli::Cli;
use crate::config::PackConfig;
use crate::pack::{PackSummary, pack};
use crate::{debug, log};

/// Run a full packing pass for the parsed command line.
pub fn pack_assets(cli: &Cli, config: &PackConfig) -> Result<PackSummary> {
    let build_dir = cli.build_folder();
    if cli.clean {
        clear_build_dir(&build_dir)?;
    }
    debug!("cache"; "using {}", build_dir.display());

    let started = Instant::now();
    let summary = pack(&cli.assets_folder, &cli.zip_name, &build_dir, config)?;

    log!(
        "pack";
        "packed {} ({} transformed, {} skipped) into {} in {:.2?}",
        plural_count(summary.entries(), "file"),
        summary.transformed,
        summary.skipped,
        cli.zip_name.display(),
        started.elapsed()
    );
    Ok(summary)
}

fn clear_build_dir(build_dir: &Path) -> Result<()> {
    if build_dir.exists() {
        debug!("cache"; "removing {}", build_dir.display());
        fs::remove_dir_all(build_dir)
            .with_context(|| format!("Failed to clean {}", build_dir.display()))?;
    }
    Ok(())
}

/// `plural_count(1, "file")` -> `"1 file"`, `plural_count(3, "file")` -> `"3 files"`
fn plural_count(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}
