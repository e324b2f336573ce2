/// Duel rule parameters and compile-time capacities.
///
/// Every numeric rule of the duel lives here so balance passes can be done from
/// data (see `duel-content`'s `ConfigLoader`) without touching the resolver.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DuelConfig {
    /// Player HP at duel start, and opponent HP for live opponents.
    pub starting_hp: u32,
    /// Stamina of both sides at duel start.
    pub starting_stamina: u32,
    /// Stamina granted to a side that passes.
    pub pass_refund: u32,
    /// Cost reduction granted by an `Energized` effect.
    pub energized_discount: u32,
    /// Highest nominal cost a `Fatigued` side may still play.
    pub fatigue_cost_threshold: u32,
    /// Damage multiplier of `Focused`, in percent.
    pub focused_multiplier_percent: u32,
    /// Damage divisor applied when the defender is `Calm`.
    pub calm_divisor: u32,
    /// Damage dealt by each `Inflamed` instance at start of turn.
    pub inflamed_damage: u32,
    /// Multiplier of `DoubleDamage` combos.
    pub combo_damage_multiplier: u32,
    /// Attack and defense bonus for cards at a boosted mastery tier.
    pub mastery_stat_bonus: u32,
    /// Bio-rhythm is clamped to `[-limit, limit]`.
    pub bio_rhythm_limit: i32,
    /// Stack score bonus per card for categories that repeat in a hand.
    pub category_repeat_bonus: u32,
    /// Stack score bonus per combo whose categories both appear in a hand.
    pub combo_synergy_bonus: u32,
}

impl DuelConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of concurrent status effects on one side.
    pub const MAX_STATUS_EFFECTS: usize = 8;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_STARTING_HP: u32 = 100;
    pub const DEFAULT_STARTING_STAMINA: u32 = 10;
    pub const DEFAULT_PASS_REFUND: u32 = 2;
    pub const DEFAULT_ENERGIZED_DISCOUNT: u32 = 2;
    pub const DEFAULT_FATIGUE_COST_THRESHOLD: u32 = 5;
    pub const DEFAULT_FOCUSED_MULTIPLIER_PERCENT: u32 = 130;
    pub const DEFAULT_CALM_DIVISOR: u32 = 2;
    pub const DEFAULT_INFLAMED_DAMAGE: u32 = 10;
    pub const DEFAULT_COMBO_DAMAGE_MULTIPLIER: u32 = 2;
    pub const DEFAULT_MASTERY_STAT_BONUS: u32 = 5;
    pub const DEFAULT_BIO_RHYTHM_LIMIT: i32 = 100;
    pub const DEFAULT_CATEGORY_REPEAT_BONUS: u32 = 5;
    pub const DEFAULT_COMBO_SYNERGY_BONUS: u32 = 50;

    pub fn new() -> Self {
        Self {
            starting_hp: Self::DEFAULT_STARTING_HP,
            starting_stamina: Self::DEFAULT_STARTING_STAMINA,
            pass_refund: Self::DEFAULT_PASS_REFUND,
            energized_discount: Self::DEFAULT_ENERGIZED_DISCOUNT,
            fatigue_cost_threshold: Self::DEFAULT_FATIGUE_COST_THRESHOLD,
            focused_multiplier_percent: Self::DEFAULT_FOCUSED_MULTIPLIER_PERCENT,
            calm_divisor: Self::DEFAULT_CALM_DIVISOR,
            inflamed_damage: Self::DEFAULT_INFLAMED_DAMAGE,
            combo_damage_multiplier: Self::DEFAULT_COMBO_DAMAGE_MULTIPLIER,
            mastery_stat_bonus: Self::DEFAULT_MASTERY_STAT_BONUS,
            bio_rhythm_limit: Self::DEFAULT_BIO_RHYTHM_LIMIT,
            category_repeat_bonus: Self::DEFAULT_CATEGORY_REPEAT_BONUS,
            combo_synergy_bonus: Self::DEFAULT_COMBO_SYNERGY_BONUS,
        }
    }

    pub fn with_starting_hp(mut self, starting_hp: u32) -> Self {
        self.starting_hp = starting_hp;
        self
    }

    pub fn with_starting_stamina(mut self, starting_stamina: u32) -> Self {
        self.starting_stamina = starting_stamina;
        self
    }
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self::new()
    }
}
