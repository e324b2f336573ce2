use crate::config::DuelConfig;

/// Who the player is dueling.
///
/// The engine treats both variants alike for combat; the distinction only
/// matters for display and for the starting HP of the opponent.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OpponentProfile {
    /// A static challenge with fixed stats.
    Challenge {
        name: String,
        hp: u32,
        attack: u32,
        description: String,
    },
    /// Another player's profile, optionally with a wager.
    Live {
        name: String,
        level: u32,
        wager: Option<u32>,
    },
}

impl OpponentProfile {
    pub fn challenge(name: impl Into<String>, hp: u32, attack: u32) -> Self {
        Self::Challenge {
            name: name.into(),
            hp,
            attack,
            description: String::new(),
        }
    }

    pub fn live(name: impl Into<String>, level: u32, wager: Option<u32>) -> Self {
        Self::Live {
            name: name.into(),
            level,
            wager,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Challenge { name, .. } | Self::Live { name, .. } => name,
        }
    }

    pub fn wager(&self) -> Option<u32> {
        match self {
            Self::Challenge { .. } => None,
            Self::Live { wager, .. } => *wager,
        }
    }

    /// HP the opponent starts the duel with.
    pub fn starting_hp(&self, config: &DuelConfig) -> u32 {
        match self {
            Self::Challenge { hp, .. } => *hp,
            Self::Live { .. } => config.starting_hp,
        }
    }
}

impl Default for OpponentProfile {
    fn default() -> Self {
        Self::challenge("Training Dummy", DuelConfig::DEFAULT_STARTING_HP, 0)
    }
}
