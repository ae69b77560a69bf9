use meal_battle_rs::battle::{BattleOutcome, MealStatsStore};
use meal_battle_rs::interface::write_leaderboard_csv;
use meal_battle_rs::kitchen::{load_meals, save_meals, Kitchen};
use meal_battle_rs::models::{Difficulty, LeaderboardSort};
use tempfile::NamedTempFile;

fn seeded_kitchen() -> Kitchen {
    let mut kitchen = Kitchen::new(Vec::new());
    kitchen
        .create_meal("Spicy Curry", "Indian", 12.99, Difficulty::High)
        .unwrap();
    kitchen
        .create_meal("Burger", "American", 8.99, Difficulty::Med)
        .unwrap();
    kitchen
        .create_meal("Pasta", "Italian", 10.99, Difficulty::Low)
        .unwrap();

    // Curry: 4 battles, 3 wins. Burger: 5 battles, 2 wins. Pasta: 3 battles, 1 win.
    for _ in 0..3 {
        kitchen.update_meal_stats(1, BattleOutcome::Win).unwrap();
    }
    kitchen.update_meal_stats(1, BattleOutcome::Loss).unwrap();
    for _ in 0..2 {
        kitchen.update_meal_stats(2, BattleOutcome::Win).unwrap();
    }
    for _ in 0..3 {
        kitchen.update_meal_stats(2, BattleOutcome::Loss).unwrap();
    }
    kitchen.update_meal_stats(3, BattleOutcome::Win).unwrap();
    for _ in 0..2 {
        kitchen.update_meal_stats(3, BattleOutcome::Loss).unwrap();
    }

    kitchen
}

#[test]
fn test_leaderboard_sorted_by_wins() {
    let kitchen = seeded_kitchen();
    let board = kitchen.get_leaderboard(LeaderboardSort::Wins);

    let names: Vec<&str> = board.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Spicy Curry", "Burger", "Pasta"]);

    assert_eq!(board[0].win_pct, 75.0);
    assert_eq!(board[1].win_pct, 40.0);
    assert_eq!(board[2].win_pct, 33.3);
}

#[test]
fn test_leaderboard_sorted_by_win_pct() {
    let mut kitchen = seeded_kitchen();
    // Push Burger's win count past Curry's while keeping its percentage lower.
    kitchen.update_meal_stats(2, BattleOutcome::Win).unwrap();
    kitchen.update_meal_stats(2, BattleOutcome::Win).unwrap();

    let by_wins = kitchen.get_leaderboard(LeaderboardSort::Wins);
    assert_eq!(by_wins[0].name, "Burger");

    let by_pct = kitchen.get_leaderboard(LeaderboardSort::WinPct);
    assert_eq!(by_pct[0].name, "Spicy Curry");
}

#[test]
fn test_leaderboard_survives_persistence_roundtrip() {
    let kitchen = seeded_kitchen();

    let file = NamedTempFile::new().unwrap();
    save_meals(file.path(), &kitchen.to_meals()).unwrap();

    let reloaded = Kitchen::new(load_meals(file.path()).unwrap());
    let board = reloaded.get_leaderboard(LeaderboardSort::Wins);

    assert_eq!(board.len(), 3);
    assert_eq!(board[0].name, "Spicy Curry");
    assert_eq!(board[0].battles, 4);
    assert_eq!(board[0].wins, 3);
}

#[test]
fn test_leaderboard_csv_export() {
    let kitchen = seeded_kitchen();
    let board = kitchen.get_leaderboard(LeaderboardSort::Wins);

    let file = NamedTempFile::new().unwrap();
    write_leaderboard_csv(&board, file.path()).unwrap();

    let content = std::fs::read_to_string(file.path()).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("rank,id,name"));
    assert!(lines[1].contains("Spicy Curry"));
    assert!(lines[1].ends_with("75.0"));
}

#[test]
fn test_deleted_meals_drop_off_the_board() {
    let mut kitchen = seeded_kitchen();
    kitchen.delete_meal(1).unwrap();

    let board = kitchen.get_leaderboard(LeaderboardSort::Wins);
    let names: Vec<&str> = board.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Burger", "Pasta"]);
}
