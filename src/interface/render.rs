use crate::battle::{battle_score, upset_threshold};
use crate::models::{LeaderboardEntry, Meal};

/// Display the leaderboard as a formatted table.
pub fn display_leaderboard(entries: &[LeaderboardEntry]) {
    if entries.is_empty() {
        println!("No battles fought yet. The leaderboard is empty.");
        return;
    }

    println!();
    println!("=== Leaderboard ===");
    println!();

    let max_name_len = entries.iter().map(|e| e.name.len()).max().unwrap_or(10);

    for (i, entry) in entries.iter().enumerate() {
        println!(
            "{:>3}. {:<width$}  {:<14} {:>7.2}  {:<4}  {:>4} battles  {:>4} wins  {:>5.1}%",
            i + 1,
            entry.name,
            entry.cuisine,
            entry.price,
            entry.difficulty.to_string(),
            entry.battles,
            entry.wins,
            entry.win_pct,
            width = max_name_len
        );
    }

    println!();
    println!("--- Summary ---");
    println!("Ranked meals: {}", entries.len());
    if let Some(top) = entries.first() {
        println!(
            "Top meal: {} ({} wins, {:.1}% win rate)",
            top.name, top.wins, top.win_pct
        );
    }
    println!();
}

/// Display the currently staged combatants with their battle scores.
pub fn display_combatants(combatants: &[Meal]) {
    if combatants.is_empty() {
        println!("No combatants prepped.");
        return;
    }

    println!();
    println!("=== Combatants ===");
    for (i, meal) in combatants.iter().enumerate() {
        println!(
            "  {}. {} ({}, {:.2}, {}) - battle score {:.2}",
            i + 1,
            meal.name,
            meal.cuisine,
            meal.price,
            meal.difficulty,
            battle_score(meal)
        );
    }
    println!();
}

/// Display the matchup and the resolved winner of a battle.
pub fn display_battle_report(first: &Meal, second: &Meal, winner: &str) {
    let score_1 = battle_score(first);
    let score_2 = battle_score(second);
    let delta = upset_threshold(first, second);

    let (favorite, underdog) = if score_1 >= score_2 {
        (first, second)
    } else {
        (second, first)
    };

    println!();
    println!("{} vs {}", first.name, second.name);
    println!("  {} scores {:.2}", first.name, score_1);
    println!("  {} scores {:.2}", second.name, score_2);
    println!(
        "  {} is the favorite; {} upsets with {:.0}% chance",
        favorite.name,
        underdog.name,
        delta * 100.0
    );
    println!();
    println!("Winner: {}!", winner);
    println!();
}
