//! Duel initialization.
//!
//! Seeds both sides from the setup, applies mastery stat bonuses to the
//! player's hand and fires unlocked duel-start passives. Accepted only once,
//! from `Pending`; a fresh duel starts from a fresh [`DuelState`].

use crate::action::{ActionTransition, RejectReason, check_invariants};
use crate::config::DuelConfig;
use crate::env::DuelEnv;
use crate::state::{
    Card, Combatant, DuelState, DuelStatus, MasteryTable, OpponentProfile, PassiveAbility,
    PassiveEffect, PassiveTrigger, Side, UiSignals,
};

/// Everything the duel is seeded from, as assembled upstream.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DuelSetup {
    pub opponent: OpponentProfile,
    pub player_hand: Vec<Card>,
    pub opponent_hand: Vec<Card>,
}

impl DuelSetup {
    pub fn new(
        opponent: OpponentProfile,
        player_hand: Vec<Card>,
        opponent_hand: Vec<Card>,
    ) -> Self {
        Self {
            opponent,
            player_hand,
            opponent_hand,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InitializeAction {
    pub setup: DuelSetup,
    pub mastery: MasteryTable,
}

impl InitializeAction {
    /// Player hand with boosted-tier stat bonuses applied, plus unlocked passives.
    fn prepare_player_hand(&self, config: &DuelConfig) -> (Vec<Card>, Vec<PassiveAbility>) {
        let mut passives = Vec::new();
        let hand = self
            .setup
            .player_hand
            .iter()
            .map(|card| {
                let mut card = card.clone();
                let Some(record) = self.mastery.get(&card.id) else {
                    return card;
                };

                if record.level.is_boosted() {
                    let bonus = config.mastery_stat_bonus;
                    card.stats.attack = card.stats.attack.saturating_add(bonus);
                    card.stats.defense = card.stats.defense.saturating_add(bonus);
                }

                if record.level.unlocks_passive() {
                    if let Some(passive) = card
                        .passive
                        .as_ref()
                        .filter(|p| p.trigger == PassiveTrigger::DuelStart)
                    {
                        passives.push(passive.clone());
                    }
                }
                card
            })
            .collect();
        (hand, passives)
    }
}

fn apply_passive(player: &mut Combatant, passive: &PassiveAbility) {
    tracing::debug!("duel-start passive '{}': {:?}", passive.name, passive.effect);
    match passive.effect {
        PassiveEffect::MaxHp(amount) => {
            let amount = i32::try_from(amount).unwrap_or(i32::MAX);
            player.max_hp = player.max_hp.saturating_add(amount);
            player.hp = player.hp.saturating_add(amount);
        }
        PassiveEffect::Stamina(amount) => {
            player.stamina = player.stamina.saturating_add(amount);
        }
        PassiveEffect::Grant { kind, duration } => {
            if player.effects.add(kind, duration, None).is_none() {
                tracing::warn!("status effect list full, passive '{}' dropped", passive.name);
            }
        }
    }
}

impl ActionTransition for InitializeAction {
    type Error = RejectReason;

    fn pre_validate(&self, state: &DuelState, _env: &DuelEnv<'_>) -> Result<(), Self::Error> {
        if state.status != DuelStatus::Pending {
            tracing::warn!(
                "initialize sent to a duel in status {}; start a fresh duel instead",
                state.status
            );
            return Err(RejectReason::AlreadyInitialized {
                status: state.status,
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut DuelState, env: &DuelEnv<'_>) -> Result<(), Self::Error> {
        let config = env.config();
        let (hand, passives) = self.prepare_player_hand(config);

        let mut player = Combatant::new(config.starting_hp, config.starting_stamina, hand);
        for passive in &passives {
            apply_passive(&mut player, passive);
        }

        let opponent = Combatant::new(
            self.setup.opponent.starting_hp(config),
            config.starting_stamina,
            self.setup.opponent_hand.clone(),
        );

        *state = DuelState {
            status: DuelStatus::Ongoing,
            turn: Side::Player,
            player,
            opponent,
            opponent_profile: self.setup.opponent.clone(),
            bio_rhythm: 0,
            primed_category: None,
            active_combo: None,
            ui: UiSignals::default(),
        };

        tracing::debug!(
            "duel initialized against {} ({} vs {} HP, {} passives)",
            state.opponent_profile.name(),
            state.player.hp,
            state.opponent.hp,
            passives.len()
        );
        Ok(())
    }

    fn post_validate(&self, state: &DuelState, env: &DuelEnv<'_>) -> Result<(), Self::Error> {
        if state.status != DuelStatus::Ongoing {
            return Err(RejectReason::InvariantViolated("initialized duel is not ongoing"));
        }
        check_invariants(state, env)
    }
}
