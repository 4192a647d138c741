//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Pack a game asset folder into a zip archive
#[derive(Parser, Debug, Clone)]
#[command(name = "pack_assets", version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Asset folder to pack
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub assets_folder: PathBuf,

    /// Archive to write (e.g. assets.zip)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub zip_name: PathBuf,

    /// Cache folder for transformed assets (default: <zip_name>.build next to the archive)
    #[arg(value_hint = clap::ValueHint::DirPath)]
    pub build_folder: Option<PathBuf>,

    /// Config file path (default: pack_assets.toml if present)
    #[arg(short = 'C', long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Delete the build folder before packing
    #[arg(short, long)]
    pub clean: bool,

    /// Pack textures as-is instead of running the compressor
    #[arg(long)]
    pub no_texture: bool,

    /// Print debug output
    #[arg(short, long)]
    pub verbose: bool,

    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,
}

impl Cli {
    /// Build folder, defaulting to `<zip stem>.build` beside the archive.
    pub fn build_folder(&self) -> PathBuf {
        match &self.build_folder {
            Some(dir) => dir.clone(),
            None => {
                let mut name = self.zip_name.file_stem().unwrap_or_default().to_os_string();
                name.push(".build");
                self.zip_name.with_file_name(name)
            }
        }
    }
}
