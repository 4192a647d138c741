//! Zip archive output.
//!
//! Entries are streamed into `<archive>.partial` and the file is renamed to
//! its final name only by [`ArchiveWriter::finish`]. A previous archive at the
//! target is removed up front, so after a failed run nothing is left at the
//! target at all.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use zip::{CompressionMethod, ZipWriter, write::FileOptions};

use crate::debug;

pub struct ArchiveWriter {
    zip: ZipWriter<File>,
    options: FileOptions,
    partial: PathBuf,
    target: PathBuf,
    entries: usize,
}

impl ArchiveWriter {
    /// Start a deflate-compressed archive that will end up at `target`.
    pub fn create(target: &Path, level: Option<i32>) -> Result<Self> {
        if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        match fs::remove_file(target) {
            Ok(()) => debug!("pack"; "removed previous {}", target.display()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to remove previous {}", target.display()));
            }
        }

        let partial = partial_path(target);
        let file = File::create(&partial)
            .with_context(|| format!("Failed to create {}", partial.display()))?;
        let options = FileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(level);

        Ok(Self {
            zip: ZipWriter::new(file),
            options,
            partial,
            target: target.to_path_buf(),
            entries: 0,
        })
    }

    /// Where entries are written until [`finish`](Self::finish).
    pub fn partial(&self) -> &Path {
        &self.partial
    }

    /// Copy `source` into the archive under `name`.
    pub fn add_file(&mut self, name: &str, source: &Path) -> Result<()> {
        let mut file =
            File::open(source).with_context(|| format!("Failed to open {}", source.display()))?;

        self.zip
            .start_file(name, self.options)
            .with_context(|| format!("Failed to start archive entry {name}"))?;
        io::copy(&mut file, &mut self.zip)
            .with_context(|| format!("Failed to write {} into archive", source.display()))?;

        self.entries += 1;
        Ok(())
    }

    /// Write the central directory and move the archive into place.
    ///
    /// Returns the number of entries written.
    pub fn finish(mut self) -> Result<usize> {
        let result = self
            .zip
            .finish()
            .context("Failed to finalize archive")
            .and_then(|_| {
                fs::rename(&self.partial, &self.target).with_context(|| {
                    format!("Failed to move archive to {}", self.target.display())
                })
            });

        match result {
            Ok(()) => Ok(self.entries),
            Err(err) => {
                let _ = fs::remove_file(&self.partial);
                Err(err)
            }
        }
    }

    /// Drop the unfinished archive.
    pub fn discard(self) {
        let Self { zip, partial, .. } = self;
        drop(zip);
        let _ = fs::remove_file(partial);
    }
}

/// `assets.zip` -> `assets.zip.partial`
fn partial_path(target: &Path) -> PathBuf {
    let mut name = target.file_name().unwrap_or_default().to_os_string();
    name.push(".partial");
    target.with_file_name(name)
}
