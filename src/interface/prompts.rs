use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{MealError, Result};
use crate::models::{Difficulty, Meal};

/// Minimum Jaro-Winkler similarity for fuzzy name candidates.
const FUZZY_THRESHOLD: f64 = 0.7;

/// Prompt for a combatant by name with fuzzy matching.
///
/// Returns `None` when the user submits an empty line.
pub fn prompt_combatant(available: &[&Meal], slot_label: &str) -> Result<Option<String>> {
    loop {
        let input: String = Input::new()
            .with_prompt(format!("{} (or press Enter to cancel)", slot_label))
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        // Try exact match first (case-insensitive).
        let exact_match = available
            .iter()
            .find(|m| m.name.to_lowercase() == input.to_lowercase());

        if let Some(meal) = exact_match {
            return Ok(Some(meal.name.clone()));
        }

        // Try fuzzy matching.
        let mut candidates: Vec<(&Meal, f64)> = available
            .iter()
            .map(|m| (*m, jaro_winkler(&m.name.to_lowercase(), &input.to_lowercase())))
            .filter(|(_, score)| *score > FUZZY_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        if candidates.is_empty() {
            println!("No meal found matching '{}'", input);
            continue;
        }

        if candidates.len() == 1 {
            let meal = candidates[0].0;
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", meal.name))
                .default(true)
                .interact()?;

            if confirm {
                return Ok(Some(meal.name.clone()));
            }
        } else {
            // Multiple matches - let the user select.
            let options: Vec<String> = candidates
                .iter()
                .take(5)
                .map(|(m, _)| m.name.clone())
                .collect();

            let mut selection_options = options.clone();
            selection_options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&selection_options)
                .default(0)
                .interact()?;

            if selection < options.len() {
                return Ok(Some(options[selection].clone()));
            }
        }
    }
}

/// Prompt for all fields of a new meal.
pub fn prompt_new_meal() -> Result<(String, String, f64, Difficulty)> {
    let name: String = Input::new().with_prompt("Meal name").interact_text()?;
    let cuisine: String = Input::new().with_prompt("Cuisine").interact_text()?;

    let price_input: String = Input::new().with_prompt("Price").interact_text()?;
    let price: f64 = price_input
        .parse()
        .map_err(|_| MealError::InvalidInput("Invalid number".to_string()))?;

    let difficulty = prompt_difficulty()?;

    Ok((name, cuisine, price, difficulty))
}

/// Prompt for a difficulty level.
pub fn prompt_difficulty() -> Result<Difficulty> {
    let options = ["LOW", "MED", "HIGH"];

    let selection = Select::new()
        .with_prompt("Difficulty")
        .items(&options)
        .default(1)
        .interact()?;

    Ok(options[selection].parse::<Difficulty>()?)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
