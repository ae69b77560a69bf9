mod leaderboard;
mod meal;

pub use leaderboard::{LeaderboardEntry, LeaderboardSort};
pub use meal::{Difficulty, Meal};
