//! Read-only rule data consulted by the reducer.
//!
//! The [`DuelEnv`] aggregate bundles the rule parameters and the combo book so
//! every transition receives its inputs explicitly; the engine has no ambient
//! or global state.

use crate::config::DuelConfig;
use crate::state::ComboBook;

/// Aggregates read-only data required by the reducer and action pipeline.
#[derive(Clone, Copy, Debug)]
pub struct DuelEnv<'a> {
    config: &'a DuelConfig,
    combos: &'a ComboBook,
}

impl<'a> DuelEnv<'a> {
    pub fn new(config: &'a DuelConfig, combos: &'a ComboBook) -> Self {
        Self { config, combos }
    }

    pub fn config(&self) -> &'a DuelConfig {
        self.config
    }

    pub fn combos(&self) -> &'a ComboBook {
        self.combos
    }
}
