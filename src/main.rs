use std::path::Path;

use clap::Parser;

use meal_battle_rs::battle::BattleEngine;
use meal_battle_rs::cli::{Cli, Command};
use meal_battle_rs::error::{MealError, Result};
use meal_battle_rs::interface::{
    display_battle_report, display_combatants, display_leaderboard, prompt_combatant,
    prompt_new_meal, prompt_yes_no, write_leaderboard_csv,
};
use meal_battle_rs::kitchen::{load_meals, save_meals, Kitchen};
use meal_battle_rs::models::{Difficulty, LeaderboardSort, Meal};
use meal_battle_rs::random::{RandomOrgClient, RandomSource, SeededRngSource, ThreadRngSource};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Add {
            name,
            cuisine,
            price,
            difficulty,
        } => cmd_add(&cli.file, name, cuisine, price, difficulty),
        Command::Delete { id } => cmd_delete(&cli.file, id),
        Command::Leaderboard { sort } => cmd_leaderboard(&cli.file, &sort),
        Command::Battle { first, second } => {
            let mut random = make_random_source(cli.offline, cli.seed)?;
            cmd_battle(&cli.file, first, second, random.as_mut())
        }
        Command::Play => {
            let mut random = make_random_source(cli.offline, cli.seed)?;
            cmd_play(&cli.file, random.as_mut())
        }
        Command::Export { path } => cmd_export(&cli.file, &path),
        Command::ClearMeals => cmd_clear(&cli.file),
    }
}

/// Pick the random source from the CLI flags.
fn make_random_source(offline: bool, seed: Option<u64>) -> Result<Box<dyn RandomSource>> {
    match seed {
        Some(seed) => Ok(Box::new(SeededRngSource::new(seed))),
        None if offline => Ok(Box::new(ThreadRngSource)),
        None => Ok(Box::new(RandomOrgClient::new()?)),
    }
}

/// Load the kitchen, starting empty when the state file does not exist yet.
fn load_kitchen(file_path: &str) -> Result<Kitchen> {
    let path = Path::new(file_path);
    if !path.exists() {
        return Ok(Kitchen::new(Vec::new()));
    }
    Ok(Kitchen::new(load_meals(path)?))
}

/// Add a meal, prompting for fields the user left off the command line.
fn cmd_add(
    file_path: &str,
    name: Option<String>,
    cuisine: Option<String>,
    price: Option<f64>,
    difficulty: Option<String>,
) -> Result<()> {
    let mut kitchen = load_kitchen(file_path)?;

    let (name, cuisine, price, difficulty) = match (name, cuisine, price, difficulty) {
        (Some(n), Some(c), Some(p), Some(d)) => (n, c, p, d.parse::<Difficulty>()?),
        _ => prompt_new_meal()?,
    };

    let id = kitchen.create_meal(&name, &cuisine, price, difficulty)?;
    save_meals(file_path, &kitchen.to_meals())?;
    println!("Added meal '{}' (id {}).", name, id);
    Ok(())
}

/// Soft-delete a meal by id.
fn cmd_delete(file_path: &str, id: u64) -> Result<()> {
    let mut kitchen = load_kitchen(file_path)?;
    kitchen.delete_meal(id)?;
    save_meals(file_path, &kitchen.to_meals())?;
    println!("Deleted meal {}.", id);
    Ok(())
}

/// Show the leaderboard in the requested sort order.
fn cmd_leaderboard(file_path: &str, sort: &str) -> Result<()> {
    let kitchen = load_kitchen(file_path)?;
    let sort = sort.parse::<LeaderboardSort>()?;
    display_leaderboard(&kitchen.get_leaderboard(sort));
    Ok(())
}

/// Export the leaderboard (sorted by wins) to CSV.
fn cmd_export(file_path: &str, out_path: &str) -> Result<()> {
    let kitchen = load_kitchen(file_path)?;
    let entries = kitchen.get_leaderboard(LeaderboardSort::Wins);
    write_leaderboard_csv(&entries, Path::new(out_path))?;
    println!("Exported {} leaderboard rows to {}.", entries.len(), out_path);
    Ok(())
}

/// Remove every meal after confirmation.
fn cmd_clear(file_path: &str) -> Result<()> {
    let mut kitchen = load_kitchen(file_path)?;
    if kitchen.is_empty() {
        println!("The kitchen is already empty.");
        return Ok(());
    }

    let confirmed = prompt_yes_no(
        &format!("Remove all {} meals? This cannot be undone.", kitchen.len()),
        false,
    )?;
    if !confirmed {
        println!("Nothing removed.");
        return Ok(());
    }

    kitchen.clear_meals();
    save_meals(file_path, &kitchen.to_meals())?;
    println!("Cleared all meals.");
    Ok(())
}

/// Resolve one combatant, either from a command-line name or interactively.
///
/// Returns `None` when the user cancels or nothing is available.
fn resolve_combatant(
    kitchen: &Kitchen,
    arg: Option<String>,
    slot_label: &str,
    exclude: &[String],
) -> Result<Option<Meal>> {
    if let Some(name) = arg {
        return Ok(Some(kitchen.get_meal_by_name(&name)?.clone()));
    }

    let available: Vec<&Meal> = kitchen
        .all_active()
        .into_iter()
        .filter(|m| !exclude.iter().any(|x| x.to_lowercase() == m.key()))
        .collect();

    if available.is_empty() {
        println!("No meals available to fight.");
        return Ok(None);
    }

    match prompt_combatant(&available, slot_label)? {
        Some(name) => Ok(Some(kitchen.get_meal_by_name(&name)?.clone())),
        None => Ok(None),
    }
}

/// Fight a single battle and record the outcome.
fn cmd_battle(
    file_path: &str,
    first: Option<String>,
    second: Option<String>,
    random: &mut dyn RandomSource,
) -> Result<()> {
    let mut kitchen = load_kitchen(file_path)?;
    if kitchen.all_active().len() < 2 {
        println!("At least two meals are needed for a battle. Use 'add' first.");
        return Ok(());
    }

    let Some(first) = resolve_combatant(&kitchen, first, "First combatant", &[])? else {
        return Ok(());
    };
    let exclude = [first.name.clone()];
    let Some(second) = resolve_combatant(&kitchen, second, "Second combatant", &exclude)? else {
        return Ok(());
    };

    if first.id == second.id {
        return Err(MealError::InvalidInput(
            "a meal cannot battle itself".to_string(),
        ));
    }

    let mut engine = BattleEngine::new();
    engine.prep_combatant(first.clone())?;
    engine.prep_combatant(second.clone())?;
    display_combatants(engine.get_combatants());

    let winner = engine.battle(random, &mut kitchen)?;
    display_battle_report(&first, &second, &winner);

    save_meals(file_path, &kitchen.to_meals())?;
    Ok(())
}

/// Interactive session: the winner stays staged until the user quits.
fn cmd_play(file_path: &str, random: &mut dyn RandomSource) -> Result<()> {
    let mut kitchen = load_kitchen(file_path)?;
    if kitchen.all_active().len() < 2 {
        println!("At least two meals are needed to play. Use 'add' first.");
        return Ok(());
    }

    println!("Welcome to Meal Battle! The winner stays on.");
    let mut engine = BattleEngine::new();

    loop {
        while engine.get_combatants().len() < 2 {
            let exclude: Vec<String> = engine
                .get_combatants()
                .iter()
                .map(|m| m.name.clone())
                .collect();
            let label = if engine.get_combatants().is_empty() {
                "First combatant"
            } else {
                "Challenger"
            };

            match resolve_combatant(&kitchen, None, label, &exclude)? {
                Some(meal) => engine.prep_combatant(meal)?,
                None => {
                    println!("Goodbye!");
                    return Ok(());
                }
            }
        }

        display_combatants(engine.get_combatants());

        let first = engine.get_combatants()[0].clone();
        let second = engine.get_combatants()[1].clone();
        let winner = engine.battle(random, &mut kitchen)?;
        display_battle_report(&first, &second, &winner);

        save_meals(file_path, &kitchen.to_meals())?;

        if !prompt_yes_no("Send in the next challenger?", true)? {
            println!("Thanks for playing!");
            return Ok(());
        }
    }
}
