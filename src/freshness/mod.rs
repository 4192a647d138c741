//! Freshness detection for cached transformer outputs (mtime based).

pub mod mtime;

pub use mtime::{get_mtime, is_output_fresh, newest_mtime};
