use std::str::FromStr;

use serde::Serialize;

use crate::error::MealError;
use crate::models::{Difficulty, Meal};

/// Sort order for the leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaderboardSort {
    /// Descending by total wins.
    Wins,
    /// Descending by win percentage.
    WinPct,
}

impl FromStr for LeaderboardSort {
    type Err = MealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wins" => Ok(LeaderboardSort::Wins),
            "win_pct" => Ok(LeaderboardSort::WinPct),
            _ => Err(MealError::InvalidSortBy(s.to_string())),
        }
    }
}

/// One row of the battle leaderboard.
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntry {
    pub id: u64,
    pub name: String,
    pub cuisine: String,
    pub price: f64,
    pub difficulty: Difficulty,
    pub battles: u64,
    pub wins: u64,
    /// Win percentage rounded to one decimal place.
    pub win_pct: f64,
}

impl LeaderboardEntry {
    pub fn from_meal(meal: &Meal) -> Self {
        Self {
            id: meal.id,
            name: meal.name.clone(),
            cuisine: meal.cuisine.clone(),
            price: meal.price,
            difficulty: meal.difficulty,
            battles: meal.battles,
            wins: meal.wins,
            win_pct: meal.win_pct(),
        }
    }
}
