//! Combo book loader.

use std::collections::HashSet;
use std::path::Path;

use duel_core::ComboBook;

use crate::loaders::{LoadResult, read_file};

/// Loader for combo books from RON files.
pub struct ComboLoader;

impl ComboLoader {
    /// Load a combo book from a RON file.
    pub fn load(path: &Path) -> LoadResult<ComboBook> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load combos {}: {}", path.display(), e))
    }

    /// Parse a combo book from RON text.
    ///
    /// Two combos sharing a prime/trigger pair are rejected: only the first
    /// could ever fire.
    pub fn parse(content: &str) -> LoadResult<ComboBook> {
        let book: ComboBook = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse combo book RON: {}", e))?;

        let mut pairs = HashSet::new();
        for combo in book.iter() {
            if !pairs.insert((combo.prime_category, combo.trigger_category)) {
                anyhow::bail!(
                    "Combo '{}' repeats the {} -> {} pair",
                    combo.name,
                    combo.prime_category,
                    combo.trigger_category
                );
            }
        }

        Ok(book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duel_core::{Category, ComboEffect};

    #[test]
    fn parses_every_effect_kind() {
        let book = ComboLoader::parse(
            r#"[
                (name: "Sunrise Run", prime_category: Light, trigger_category: Movement,
                 effect: DoubleDamage),
                (name: "Deep Reset", prime_category: Breath, trigger_category: Sleep,
                 effect: Heal(amount: 15)),
                (name: "Contrast", prime_category: Cold, trigger_category: Heat,
                 effect: Stun),
                (name: "Stillness", prime_category: Mindset, trigger_category: Breath,
                 effect: Immune),
            ]"#,
        )
        .unwrap();

        assert_eq!(book.len(), 4);
        let reset = book.find(Category::Breath, &[Category::Sleep]).unwrap();
        assert_eq!(reset.effect, ComboEffect::Heal { amount: 15 });
    }

    #[test]
    fn repeated_pair_is_rejected() {
        let err = ComboLoader::parse(
            r#"[
                (name: "A", prime_category: Light, trigger_category: Movement, effect: Stun),
                (name: "B", prime_category: Light, trigger_category: Movement, effect: Immune),
            ]"#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("'B'"));
    }
}
