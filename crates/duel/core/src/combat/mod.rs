//! Combat resolution system.
//!
//! This module provides the rules for playing one card. All functions are
//! deterministic; only [`resolve_play`] mutates, and only after validation.
//!
//! # Core Functions
//!
//! - `resolve_play`: cost check, combo detection, damage, status application
//! - `check_playable` / `effective_cost`: stamina and fatigue rules
//! - `calculate_damage`: Focused / combo / Calm pipeline

pub mod cost;
pub mod damage;
pub mod resolver;

pub use cost::{check_playable, effective_cost, playable_cards};
pub use damage::{DamageModifiers, calculate_damage, divide_rounded, scale_percent};
pub use resolver::{PlayOutcome, detect_combo, resolve_play};
