use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MealError;

/// Cooking difficulty of a meal.
///
/// Harder meals take a smaller battle-score penalty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Low,
    Med,
    High,
}

impl Difficulty {
    /// Battle-score penalty: HIGH -> 1, MED -> 2, LOW -> 3.
    #[inline]
    pub fn score_modifier(self) -> f64 {
        match self {
            Difficulty::High => 1.0,
            Difficulty::Med => 2.0,
            Difficulty::Low => 3.0,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Difficulty::Low => "LOW",
            Difficulty::Med => "MED",
            Difficulty::High => "HIGH",
        })
    }
}

impl FromStr for Difficulty {
    type Err = MealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "LOW" => Ok(Difficulty::Low),
            "MED" => Ok(Difficulty::Med),
            "HIGH" => Ok(Difficulty::High),
            _ => Err(MealError::InvalidDifficulty(s.to_string())),
        }
    }
}

/// A meal record: identity, battle-relevant metadata, and cumulative stats.
///
/// The stats counters and the soft-delete flag default to zero/false so a
/// hand-written kitchen file of bare meals loads cleanly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    pub id: u64,

    pub name: String,

    pub cuisine: String,

    pub price: f64,

    pub difficulty: Difficulty,

    #[serde(default)]
    pub battles: u64,

    #[serde(default)]
    pub wins: u64,

    #[serde(default)]
    pub deleted: bool,
}

impl Meal {
    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Win percentage over all battles, rounded to one decimal place.
    ///
    /// Zero battles yields 0.0.
    pub fn win_pct(&self) -> f64 {
        if self.battles == 0 {
            return 0.0;
        }
        let pct = self.wins as f64 * 100.0 / self.battles as f64;
        (pct * 10.0).round() / 10.0
    }
}

impl PartialEq for Meal {
    fn eq(&self, other: &Self) -> bool {
        self.name.to_lowercase() == other.name.to_lowercase()
    }
}

impl Eq for Meal {}

impl std::hash::Hash for Meal {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.to_lowercase().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_meal() -> Meal {
        Meal {
            id: 1,
            name: "Pad Thai".to_string(),
            cuisine: "Thai".to_string(),
            price: 12.5,
            difficulty: Difficulty::Med,
            battles: 0,
            wins: 0,
            deleted: false,
        }
    }

    #[test]
    fn test_score_modifier_table() {
        assert_eq!(Difficulty::High.score_modifier(), 1.0);
        assert_eq!(Difficulty::Med.score_modifier(), 2.0);
        assert_eq!(Difficulty::Low.score_modifier(), 3.0);
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!("LOW".parse::<Difficulty>().unwrap(), Difficulty::Low);
        assert_eq!("med".parse::<Difficulty>().unwrap(), Difficulty::Med);
        assert_eq!("High".parse::<Difficulty>().unwrap(), Difficulty::High);

        let err = "EXTREME".parse::<Difficulty>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid difficulty level: EXTREME. Must be 'LOW', 'MED', or 'HIGH'."
        );
    }

    #[test]
    fn test_difficulty_serde_uppercase() {
        let json = serde_json::to_string(&Difficulty::Med).unwrap();
        assert_eq!(json, "\"MED\"");

        let parsed: Difficulty = serde_json::from_str("\"HIGH\"").unwrap();
        assert_eq!(parsed, Difficulty::High);
    }

    #[test]
    fn test_meal_defaults_on_deserialize() {
        let json = r#"{"id": 7, "name": "Ramen", "cuisine": "Japanese", "price": 9.0, "difficulty": "LOW"}"#;
        let meal: Meal = serde_json::from_str(json).unwrap();
        assert_eq!(meal.battles, 0);
        assert_eq!(meal.wins, 0);
        assert!(!meal.deleted);
    }

    #[test]
    fn test_win_pct_rounding() {
        let mut meal = sample_meal();
        meal.battles = 15;
        meal.wins = 5;
        assert_eq!(meal.win_pct(), 33.3);

        meal.battles = 20;
        meal.wins = 15;
        assert_eq!(meal.win_pct(), 75.0);

        meal.battles = 0;
        meal.wins = 0;
        assert_eq!(meal.win_pct(), 0.0);
    }

    #[test]
    fn test_equality_case_insensitive() {
        let meal1 = sample_meal();
        let mut meal2 = sample_meal();
        meal2.name = "PAD THAI".to_string();
        meal2.id = 99;
        assert_eq!(meal1, meal2);
    }
}
