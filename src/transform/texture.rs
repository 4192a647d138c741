//! Texture compression through an external tool.
//!
//! Compression is best-effort: a missing or failing compressor means the
//! source `.png` is packed unchanged. [`compress`] reports exactly what
//! happened and [`transform`] collapses that to "new extension or nothing",
//! so no compressor error ever aborts a run.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Error, anyhow};

use super::TransformContext;
use crate::config::section::texture::{INPUT_VAR, OUTPUT_VAR};
use crate::freshness::{get_mtime, is_output_fresh, newest_mtime};
use crate::utils::exec::{Cmd, resolve_args};
use crate::utils::path::swap_extension;
use crate::{debug, log};

/// What happened when a texture was handed to the compressor.
#[derive(Debug)]
pub enum CompressOutcome {
    /// The compressor could not be found.
    ToolAbsent { program: String },
    /// The compressor ran but failed or produced nothing.
    ToolFailed(Error),
    /// The compressor wrote a new output.
    Compressed,
    /// An up-to-date output already existed; the compressor was not run.
    Cached,
}

impl CompressOutcome {
    /// Whether an output file is available in the build directory.
    pub fn has_output(&self) -> bool {
        matches!(self, Self::Compressed | Self::Cached)
    }
}

/// Compress `source` into the build directory next to `dest`.
///
/// Returns the compressed extension, or `None` to pack the source as-is.
pub fn transform(
    ctx: &TransformContext<'_>,
    source: &Path,
    dest: &Path,
) -> anyhow::Result<Option<String>> {
    if !ctx.texture.enable {
        return Ok(None);
    }

    let output = swap_extension(dest, &ctx.texture.extension);
    let outcome = compress(ctx, source, &output);
    match &outcome {
        CompressOutcome::ToolAbsent { program } => {
            debug!("texture"; "`{}` not found, packing {} as-is", program, source.display());
        }
        CompressOutcome::ToolFailed(err) => {
            debug!("texture"; "packing {} as-is: {:#}", source.display(), err);
        }
        CompressOutcome::Compressed => {
            log!("texture"; "{}", output.display());
        }
        CompressOutcome::Cached => {
            debug!("cache"; "reusing {}", output.display());
        }
    }

    Ok(outcome
        .has_output()
        .then(|| ctx.texture.extension.clone()))
}

/// Run the configured compressor unless a fresh output already exists.
///
/// The output is fresh when its mtime is at least the newest of the source,
/// the packer executable and the compressor binary.
pub fn compress(ctx: &TransformContext<'_>, source: &Path, output: &Path) -> CompressOutcome {
    let program = ctx.texture.program().unwrap_or_default();
    let tool = which::which(program).ok();

    let reference = newest_mtime([
        get_mtime(source),
        ctx.packer_mtime,
        tool.as_deref().and_then(get_mtime),
    ]);
    if is_output_fresh(output, reference) {
        return CompressOutcome::Cached;
    }

    let Some(tool) = tool else {
        return CompressOutcome::ToolAbsent {
            program: program.to_string(),
        };
    };

    match run_compressor(ctx, &tool, source, output) {
        Ok(()) => CompressOutcome::Compressed,
        Err(err) => {
            // A failed run must not leave a file that later looks fresh
            let _ = fs::remove_file(output);
            CompressOutcome::ToolFailed(err)
        }
    }
}

fn run_compressor(
    ctx: &TransformContext<'_>,
    tool: &Path,
    source: &Path,
    output: &Path,
) -> anyhow::Result<()> {
    let vars = HashMap::from([
        (INPUT_VAR, source.to_string_lossy().into_owned()),
        (OUTPUT_VAR, output.to_string_lossy().into_owned()),
    ]);
    let args = resolve_args(ctx.texture.args(), &vars);

    Cmd::new(tool).args(&args).run()?;

    if !output.is_file() {
        return Err(anyhow!(
            "`{}` exited successfully but wrote no {}",
            tool.display(),
            output.display()
        ));
    }
    Ok(())
}
