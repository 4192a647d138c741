//! Asset scanning, path mapping and per-file processing.

mod process;
mod route;
mod scan;

// Types
pub use route::AssetRoute;

// Scanning (pure functions)
pub use scan::scan_assets;

// Processing (side effects)
pub use process::process_asset;
