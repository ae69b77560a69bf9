mod engine;
mod scoring;

pub use engine::{BattleEngine, MAX_COMBATANTS};
pub use scoring::{battle_score, upset_threshold};

use crate::error::Result;

/// Outcome of a battle for a single combatant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    Win,
    Loss,
}

/// Persistent store the engine reports battle outcomes to.
///
/// A win increments both the meal's battle and win counters; a loss only the
/// battle counter. Implementations reject unknown or soft-deleted meals.
pub trait MealStatsStore {
    fn update_meal_stats(&mut self, meal_id: u64, outcome: BattleOutcome) -> Result<()>;
}
