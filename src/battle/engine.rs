use crate::battle::scoring::{battle_score, upset_threshold};
use crate::battle::{BattleOutcome, MealStatsStore};
use crate::error::{MealError, Result};
use crate::models::Meal;
use crate::random::RandomSource;

/// Maximum number of meals that can be staged at once.
pub const MAX_COMBATANTS: usize = 2;

/// Staging area and resolver for meal battles.
///
/// Holds up to two prepped combatants in insertion order. A battle draws a
/// random fraction from the injected [`RandomSource`], reports one win and
/// one loss to the injected [`MealStatsStore`], and evicts the loser so the
/// winner stays staged for the next round. Collaborator errors propagate
/// unmodified, and eviction only happens after both stat updates succeed.
#[derive(Debug)]
pub struct BattleEngine {
    combatants: Vec<Meal>,
}

impl BattleEngine {
    pub fn new() -> Self {
        Self {
            combatants: Vec::with_capacity(MAX_COMBATANTS),
        }
    }

    /// Stage a meal for battle.
    ///
    /// Fails with [`MealError::CombatantsFull`] when two meals are already
    /// staged; the staged list is left untouched in that case.
    pub fn prep_combatant(&mut self, meal: Meal) -> Result<()> {
        if self.combatants.len() >= MAX_COMBATANTS {
            return Err(MealError::CombatantsFull);
        }
        self.combatants.push(meal);
        Ok(())
    }

    /// Empty the staging area. Never fails.
    pub fn clear_combatants(&mut self) {
        self.combatants.clear();
    }

    /// The currently staged combatants, in prep order.
    pub fn get_combatants(&self) -> &[Meal] {
        &self.combatants
    }

    /// Resolve a battle between the two staged combatants.
    ///
    /// The score gap, normalized by 100 and clamped to [0, 1], is the upset
    /// threshold: a draw strictly below it hands the win to the lower-scoring
    /// meal, otherwise the higher score wins. With equal scores the threshold
    /// is 0 and the second entrant takes the win.
    ///
    /// Returns the winner's name. The draw happens before any stat write, so
    /// a failed draw leaves the kitchen untouched; a failed stat write leaves
    /// both combatants staged for inspection.
    pub fn battle(
        &mut self,
        random: &mut dyn RandomSource,
        stats: &mut dyn MealStatsStore,
    ) -> Result<String> {
        if self.combatants.len() < MAX_COMBATANTS {
            return Err(MealError::TwoCombatantsRequired);
        }

        let score_1 = battle_score(&self.combatants[0]);
        let score_2 = battle_score(&self.combatants[1]);
        let delta = upset_threshold(&self.combatants[0], &self.combatants[1]);

        let roll = random.get_random()?;

        let (winner_idx, loser_idx) = if roll < delta {
            // Upset: the lower score takes the win.
            if score_1 < score_2 { (0, 1) } else { (1, 0) }
        } else if score_1 > score_2 {
            (0, 1)
        } else {
            (1, 0)
        };

        stats.update_meal_stats(self.combatants[winner_idx].id, BattleOutcome::Win)?;
        stats.update_meal_stats(self.combatants[loser_idx].id, BattleOutcome::Loss)?;

        let winner_name = self.combatants[winner_idx].name.clone();
        self.combatants.remove(loser_idx);

        Ok(winner_name)
    }
}

impl Default for BattleEngine {
    fn default() -> Self {
        Self::new()
    }
}
