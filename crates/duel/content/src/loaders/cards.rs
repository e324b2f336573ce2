//! Card catalog loader.

use std::collections::HashSet;
use std::path::Path;

use duel_core::{Card, CardId};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Card catalog structure for RON files.
///
/// Cards keep their file order, which is also the order [`CardCatalog::iter`]
/// yields them in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardCatalog {
    pub cards: Vec<Card>,
}

impl CardCatalog {
    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|card| &card.id == id)
    }

    /// Resolves a hand from card ids, in the order given.
    ///
    /// Fails on the first id the catalog does not know.
    pub fn hand<'a, I>(&self, ids: I) -> LoadResult<Vec<Card>>
    where
        I: IntoIterator<Item = &'a CardId>,
    {
        ids.into_iter()
            .map(|id| {
                self.get(id)
                    .cloned()
                    .ok_or_else(|| anyhow::anyhow!("Unknown card id '{}'", id))
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Loader for card catalogs from RON files.
pub struct CardLoader;

impl CardLoader {
    /// Load a card catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<CardCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load cards {}: {}", path.display(), e))
    }

    /// Parse a card catalog from RON text, rejecting duplicate ids.
    pub fn parse(content: &str) -> LoadResult<CardCatalog> {
        let catalog: CardCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse card catalog RON: {}", e))?;

        let mut seen = HashSet::new();
        for card in &catalog.cards {
            if !seen.insert(&card.id) {
                anyhow::bail!("Duplicate card id '{}'", card.id);
            }
        }

        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duel_core::{Category, StatusEffectKind};

    const CATALOG: &str = r#"(
        cards: [
            (
                id: "sunlight",
                name: "Morning Sunlight",
                categories: [Light],
                stats: (attack: 8, defense: 6),
                stamina_cost: 2,
                primes_category: Some(Light),
            ),
            (
                id: "sauna",
                name: "Sauna Session",
                categories: [Heat, Recovery],
                stats: (attack: 12, defense: 4),
                stamina_cost: 4,
                bio_rhythm_impact: 15,
                applies_status_effect: Some((kind: Calm, duration: 2, target: OnSelf)),
            ),
        ],
    )"#;

    #[test]
    fn parses_optional_fields() {
        let catalog = CardLoader::parse(CATALOG).unwrap();

        assert_eq!(catalog.len(), 2);
        let sunlight = catalog.get(&"sunlight".into()).unwrap();
        assert_eq!(sunlight.primes_category, Some(Category::Light));
        assert_eq!(sunlight.bio_rhythm_impact, 0);

        let sauna = catalog.get(&"sauna".into()).unwrap();
        assert_eq!(
            sauna.applies_status_effect.map(|e| e.kind),
            Some(StatusEffectKind::Calm)
        );
    }

    #[test]
    fn hand_keeps_requested_order() {
        let catalog = CardLoader::parse(CATALOG).unwrap();
        let ids = [CardId::from("sauna"), CardId::from("sunlight")];

        let hand = catalog.hand(&ids).unwrap();

        assert_eq!(hand[0].id.as_str(), "sauna");
        assert_eq!(hand[1].id.as_str(), "sunlight");
    }

    #[test]
    fn unknown_id_fails_hand() {
        let catalog = CardLoader::parse(CATALOG).unwrap();
        let err = catalog.hand(&[CardId::from("ghost")]).unwrap_err();
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = CardLoader::parse(r#"(cards: [(id: "a"), (id: "a")])"#).unwrap_err();
        assert!(err.to_string().contains("Duplicate"));
    }
}
