//! Data-driven duel content and loaders.
//!
//! This crate houses the static duel content and provides loaders for RON/TOML
//! data files:
//! - Card catalogs (data-driven via RON)
//! - Combo books (data-driven via RON)
//! - Player mastery tables (data-driven via RON)
//! - Duel rule parameters (data-driven via TOML)
//!
//! Content is resolved into duel-core types before a duel starts; the engine
//! never performs catalog lookups itself.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    CardCatalog, CardLoader, ComboLoader, ConfigLoader, ContentFactory, LoadResult, MasteryLoader,
};
