//! Content loaders for reading duel data from files.
//!
//! Each loader has a `load(path)` entry point for files on disk and a `parse`
//! entry point for embedded or in-memory data.

pub mod cards;
pub mod combos;
pub mod config;
pub mod factory;
pub mod mastery;

pub use cards::{CardCatalog, CardLoader};
pub use combos::ComboLoader;
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use mastery::MasteryLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
