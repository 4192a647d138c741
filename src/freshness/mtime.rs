//! Mtime-based freshness detection for cached outputs.
//!
//! Cached files in the build directory are written by the packer (or by the
//! compressor it spawns), so timestamps are a reliable staleness signal:
//! a cache entry is fresh when it is at least as new as its source and as
//! the tool that produced it.

use std::path::Path;
use std::time::SystemTime;

/// Check if output file is at least as new as the given reference mtime
///
/// Returns `true` if the output exists and `output_mtime >= reference`,
/// meaning the output is fresh and processing can be skipped
pub fn is_output_fresh(output: &Path, reference: Option<SystemTime>) -> bool {
    let Some(reference) = reference else {
        return false;
    };

    get_mtime(output).is_some_and(|output_time| output_time >= reference)
}

/// Get the modification time of a file
///
/// Returns `None` if the file doesn't exist or mtime cannot be read
pub fn get_mtime(path: &Path) -> Option<SystemTime> {
    path.metadata().and_then(|m| m.modified()).ok()
}

/// Newest of the given mtimes, ignoring unknown ones
pub fn newest_mtime<I>(times: I) -> Option<SystemTime>
where
    I: IntoIterator<Item = Option<SystemTime>>,
{
    times.into_iter().flatten().max()
}
