//! Configuration section definitions.
//!
//! | Module    | TOML Section | Purpose                        |
//! |-----------|--------------|--------------------------------|
//! | `texture` | `[texture]`  | External texture compressor    |
//! | `archive` | `[archive]`  | Zip output settings            |

mod archive;
pub mod texture;

pub use archive::ArchiveConfig;
pub use texture::TextureConfig;
