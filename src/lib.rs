pub mod battle;
pub mod cli;
pub mod error;
pub mod interface;
pub mod kitchen;
pub mod models;
pub mod random;

pub use battle::{battle_score, BattleEngine, BattleOutcome, MealStatsStore};
pub use error::{MealError, Result};
pub use models::{Difficulty, LeaderboardEntry, LeaderboardSort, Meal};
