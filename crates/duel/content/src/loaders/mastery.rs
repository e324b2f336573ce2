//! Player mastery table loader.

use std::path::Path;

use duel_core::MasteryTable;

use crate::loaders::{LoadResult, read_file};

/// Loader for mastery tables from RON files.
///
/// The file is a map from card id to `(level, streak)` records. Cards without
/// an entry are treated as `Novice` by the engine.
pub struct MasteryLoader;

impl MasteryLoader {
    pub fn load(path: &Path) -> LoadResult<MasteryTable> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load mastery {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<MasteryTable> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse mastery RON: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duel_core::{CardId, MasteryLevel};

    #[test]
    fn parses_levels_and_default_streak() {
        let table = MasteryLoader::parse(
            r#"{
                "cold_plunge": (level: Expert, streak: 21),
                "sunlight": (level: Adept),
            }"#,
        )
        .unwrap();

        let plunge = table[&CardId::from("cold_plunge")];
        assert_eq!(plunge.level, MasteryLevel::Expert);
        assert_eq!(plunge.streak, 21);
        assert_eq!(table[&CardId::from("sunlight")].streak, 0);
    }
}
