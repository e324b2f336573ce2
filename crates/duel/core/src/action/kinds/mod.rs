//! Transition implementations, one per action kind.

mod animation;
mod end_duel;
mod initialize;
mod opponent_turn;
mod pass;
mod play_card;
mod start_of_turn;

pub use animation::AnimationCompleteAction;
pub use end_duel::EndDuelAction;
pub use initialize::{DuelSetup, InitializeAction};
pub use opponent_turn::OpponentTurnAction;
pub use pass::PassAction;
pub use play_card::PlayCardAction;
pub use start_of_turn::StartOfTurnAction;
