//! Utility modules for the asset packer.

pub mod exec;
pub mod path;
