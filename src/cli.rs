use clap::{Parser, Subcommand};

/// MealBattle — a CLI game where stored meals fight head-to-head for kitchen glory.
#[derive(Parser, Debug)]
#[command(name = "meal_battle")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the kitchen state JSON file.
    #[arg(short, long, default_value = "kitchen_state.json")]
    pub file: String,

    /// Draw battle randomness from the local RNG instead of random.org.
    #[arg(long)]
    pub offline: bool,

    /// Seed the local RNG for reproducible battles (implies --offline).
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a meal to the kitchen (prompts when fields are omitted).
    Add {
        name: Option<String>,
        cuisine: Option<String>,
        price: Option<f64>,
        difficulty: Option<String>,
    },

    /// Soft-delete a meal by id.
    Delete { id: u64 },

    /// Show the battle leaderboard.
    Leaderboard {
        /// Sort order: "wins" or "win_pct".
        #[arg(long, default_value = "wins")]
        sort: String,
    },

    /// Fight a single battle between two meals.
    Battle {
        first: Option<String>,
        second: Option<String>,
    },

    /// Interactive session where the winner stays staged between rounds.
    Play,

    /// Export the leaderboard to a CSV file.
    Export { path: String },

    /// Remove every meal and reset id assignment.
    ClearMeals,
}

impl Default for Command {
    fn default() -> Self {
        Command::Play
    }
}
