use crate::action::{ActionTransition, RejectReason, require_ongoing};
use crate::env::DuelEnv;
use crate::state::{DuelState, DuelStatus};

/// Forces an ongoing duel into a terminal status, e.g. on forfeit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EndDuelAction {
    pub victory: bool,
}

impl ActionTransition for EndDuelAction {
    type Error = RejectReason;

    fn pre_validate(&self, state: &DuelState, _env: &DuelEnv<'_>) -> Result<(), Self::Error> {
        require_ongoing(state)
    }

    fn apply(&self, state: &mut DuelState, _env: &DuelEnv<'_>) -> Result<(), Self::Error> {
        state.status = if self.victory {
            DuelStatus::Victory
        } else {
            DuelStatus::Defeat
        };
        tracing::debug!("duel ended by caller as {}", state.status);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DuelConfig;
    use crate::state::ComboBook;

    #[test]
    fn pending_duel_cannot_be_ended() {
        let config = DuelConfig::default();
        let combos = ComboBook::default();
        let env = DuelEnv::new(&config, &combos);

        let result = EndDuelAction { victory: true }.pre_validate(&DuelState::new(), &env);

        assert_eq!(
            result,
            Err(RejectReason::NotOngoing {
                status: DuelStatus::Pending
            })
        );
    }

    #[test]
    fn finished_duel_cannot_be_ended_again() {
        let config = DuelConfig::default();
        let combos = ComboBook::default();
        let env = DuelEnv::new(&config, &combos);
        let state = DuelState {
            status: DuelStatus::Defeat,
            ..DuelState::new()
        };

        let result = EndDuelAction { victory: true }.pre_validate(&state, &env);

        assert!(matches!(result, Err(RejectReason::NotOngoing { .. })));
    }
}
