use std::cmp::Ordering;

use crate::battle::{BattleOutcome, MealStatsStore};
use crate::error::{MealError, Result};
use crate::models::{Difficulty, LeaderboardEntry, LeaderboardSort, Meal};

/// The meal record store: every meal ever added, including soft-deleted ones.
///
/// Soft-deleted meals are invisible to lookups, stat updates, and the
/// leaderboard, but their names stay reserved.
pub struct Kitchen {
    meals: Vec<Meal>,
    next_id: u64,
}

impl Kitchen {
    /// Create a kitchen from a list of meals (e.g. loaded from disk).
    pub fn new(meals: Vec<Meal>) -> Self {
        let next_id = meals.iter().map(|m| m.id).max().map_or(1, |max| max + 1);
        Self { meals, next_id }
    }

    /// Add a new meal and return its assigned id.
    ///
    /// Rejects non-positive prices, empty name/cuisine, and names already
    /// taken (case-insensitive, including by soft-deleted meals).
    pub fn create_meal(
        &mut self,
        name: &str,
        cuisine: &str,
        price: f64,
        difficulty: Difficulty,
    ) -> Result<u64> {
        if name.trim().is_empty() {
            return Err(MealError::InvalidInput("meal name is empty".to_string()));
        }
        if cuisine.trim().is_empty() {
            return Err(MealError::InvalidInput("cuisine is empty".to_string()));
        }
        if price <= 0.0 {
            return Err(MealError::InvalidPrice(price));
        }

        let key = name.to_lowercase();
        if self.meals.iter().any(|m| m.key() == key) {
            return Err(MealError::DuplicateMealName(name.to_string()));
        }

        let id = self.next_id;
        self.next_id += 1;
        self.meals.push(Meal {
            id,
            name: name.to_string(),
            cuisine: cuisine.to_string(),
            price,
            difficulty,
            battles: 0,
            wins: 0,
            deleted: false,
        });

        Ok(id)
    }

    /// Soft-delete a meal by id.
    pub fn delete_meal(&mut self, id: u64) -> Result<()> {
        let meal = self
            .meals
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(MealError::MealIdNotFound(id))?;

        if meal.deleted {
            return Err(MealError::MealDeleted(id));
        }
        meal.deleted = true;
        Ok(())
    }

    /// Drop every meal and restart id assignment at 1.
    pub fn clear_meals(&mut self) {
        self.meals.clear();
        self.next_id = 1;
    }

    /// Look up a meal by id, rejecting soft-deleted ones.
    pub fn get_meal_by_id(&self, id: u64) -> Result<&Meal> {
        let meal = self
            .meals
            .iter()
            .find(|m| m.id == id)
            .ok_or(MealError::MealIdNotFound(id))?;

        if meal.deleted {
            return Err(MealError::MealDeleted(id));
        }
        Ok(meal)
    }

    /// Look up a meal by name (case-insensitive), rejecting soft-deleted ones.
    pub fn get_meal_by_name(&self, name: &str) -> Result<&Meal> {
        let key = name.to_lowercase();
        let meal = self
            .meals
            .iter()
            .find(|m| m.key() == key)
            .ok_or_else(|| MealError::MealNameNotFound(name.to_string()))?;

        if meal.deleted {
            return Err(MealError::MealNameDeleted(meal.name.clone()));
        }
        Ok(meal)
    }

    /// All meals that can still fight (not soft-deleted).
    pub fn all_active(&self) -> Vec<&Meal> {
        self.meals.iter().filter(|m| !m.deleted).collect()
    }

    /// Battle-tested meals ranked by the requested sort order.
    ///
    /// Only non-deleted meals with at least one battle appear.
    pub fn get_leaderboard(&self, sort_by: LeaderboardSort) -> Vec<LeaderboardEntry> {
        let mut entries: Vec<LeaderboardEntry> = self
            .meals
            .iter()
            .filter(|m| !m.deleted && m.battles > 0)
            .map(LeaderboardEntry::from_meal)
            .collect();

        match sort_by {
            LeaderboardSort::Wins => entries.sort_by(|a, b| b.wins.cmp(&a.wins)),
            LeaderboardSort::WinPct => entries.sort_by(|a, b| {
                b.win_pct
                    .partial_cmp(&a.win_pct)
                    .unwrap_or(Ordering::Equal)
            }),
        }

        entries
    }

    /// Snapshot of all records for JSON serialization.
    pub fn to_meals(&self) -> Vec<Meal> {
        self.meals.clone()
    }

    /// Count of records, including soft-deleted ones.
    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}

impl MealStatsStore for Kitchen {
    fn update_meal_stats(&mut self, meal_id: u64, outcome: BattleOutcome) -> Result<()> {
        let meal = self
            .meals
            .iter_mut()
            .find(|m| m.id == meal_id)
            .ok_or(MealError::MealIdNotFound(meal_id))?;

        if meal.deleted {
            return Err(MealError::MealDeleted(meal_id));
        }

        meal.battles += 1;
        if outcome == BattleOutcome::Win {
            meal.wins += 1;
        }
        Ok(())
    }
}
