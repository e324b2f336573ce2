//! Content factory for loading duel content from data files.

use std::path::{Path, PathBuf};

use duel_core::{ComboBook, DuelConfig, MasteryTable};

use crate::loaders::{CardCatalog, CardLoader, ComboLoader, ConfigLoader, LoadResult, MasteryLoader};

const DEFAULT_CONFIG: &str = include_str!("../../data/duel.toml");
const DEFAULT_COMBOS: &str = include_str!("../../data/combos.ron");
const DEFAULT_CARDS: &str = include_str!("../../data/cards.ron");

/// Content factory that loads all duel content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── duel.toml
/// ├── cards.ron
/// ├── combos.ron
/// └── mastery.ron
/// ```
///
/// The content shipped with this crate is also embedded and available without
/// a data directory through the `default_*` constructors.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load duel configuration from `duel.toml`.
    pub fn load_config(&self) -> LoadResult<DuelConfig> {
        ConfigLoader::load(&self.data_dir.join("duel.toml"))
    }

    /// Load the card catalog from `cards.ron`.
    pub fn load_cards(&self) -> LoadResult<CardCatalog> {
        CardLoader::load(&self.data_dir.join("cards.ron"))
    }

    /// Load the combo book from `combos.ron`.
    pub fn load_combos(&self) -> LoadResult<ComboBook> {
        ComboLoader::load(&self.data_dir.join("combos.ron"))
    }

    /// Load the player's mastery table from `mastery.ron`.
    ///
    /// A missing file means a player with no mastery yet.
    pub fn load_mastery(&self) -> LoadResult<MasteryTable> {
        let path = self.data_dir.join("mastery.ron");
        if !path.exists() {
            return Ok(MasteryTable::new());
        }
        MasteryLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Rule parameters shipped with the crate.
    pub fn default_config() -> LoadResult<DuelConfig> {
        ConfigLoader::parse(DEFAULT_CONFIG)
    }

    /// Combo book shipped with the crate.
    pub fn default_combos() -> LoadResult<ComboBook> {
        ComboLoader::parse(DEFAULT_COMBOS)
    }

    /// Card catalog shipped with the crate.
    pub fn default_cards() -> LoadResult<CardCatalog> {
        CardLoader::parse(DEFAULT_CARDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn embedded_config_matches_defaults() {
        assert_eq!(ContentFactory::default_config().unwrap(), DuelConfig::default());
    }

    #[test]
    fn embedded_cards_only_prime_known_combos() {
        let cards = ContentFactory::default_cards().unwrap();
        let combos = ContentFactory::default_combos().unwrap();

        for card in cards.iter() {
            if let Some(category) = card.primes_category {
                assert!(
                    combos.primes_anything(category),
                    "{} primes {} but no combo starts there",
                    card.id,
                    category
                );
            }
        }
    }
}
