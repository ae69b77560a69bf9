use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::Meal;

/// Load meals from a JSON file.
///
/// Deduplicates by lowercase name (last occurrence wins) and returns the
/// records sorted by id.
pub fn load_meals<P: AsRef<Path>>(path: P) -> Result<Vec<Meal>> {
    let content = fs::read_to_string(path)?;
    let meals: Vec<Meal> = serde_json::from_str(&content)?;

    let mut seen: HashMap<String, Meal> = HashMap::new();
    for meal in meals {
        seen.insert(meal.key(), meal);
    }

    let mut deduped: Vec<Meal> = seen.into_values().collect();
    deduped.sort_by_key(|m| m.id);
    Ok(deduped)
}

/// Save meals to a JSON file, pretty-printed and sorted by id.
pub fn save_meals<P: AsRef<Path>>(path: P, meals: &[Meal]) -> Result<()> {
    let mut sorted: Vec<&Meal> = meals.iter().collect();
    sorted.sort_by_key(|m| m.id);

    let json = serde_json::to_string_pretty(&sorted)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::models::Difficulty;

    #[test]
    fn test_load_and_save_roundtrip() {
        let json = r#"[
            {"id": 1, "name": "Pad Thai", "cuisine": "Thai", "price": 12.5, "difficulty": "MED", "battles": 4, "wins": 3, "deleted": false}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let meals = load_meals(file.path()).unwrap();
        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0].name, "Pad Thai");
        assert_eq!(meals[0].battles, 4);

        let out_file = NamedTempFile::new().unwrap();
        save_meals(out_file.path(), &meals).unwrap();

        let reloaded = load_meals(out_file.path()).unwrap();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded[0].wins, 3);
        assert_eq!(reloaded[0].difficulty, Difficulty::Med);
    }

    #[test]
    fn test_load_bare_meals_defaults_stats() {
        let json = r#"[
            {"id": 1, "name": "Ramen", "cuisine": "Japanese", "price": 9.0, "difficulty": "LOW"}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let meals = load_meals(file.path()).unwrap();
        assert_eq!(meals[0].battles, 0);
        assert_eq!(meals[0].wins, 0);
        assert!(!meals[0].deleted);
    }

    #[test]
    fn test_load_deduplicates_by_name() {
        let json = r#"[
            {"id": 1, "name": "Ramen", "cuisine": "Japanese", "price": 9.0, "difficulty": "LOW", "wins": 1},
            {"id": 2, "name": "ramen", "cuisine": "Japanese", "price": 11.0, "difficulty": "MED", "wins": 5}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let meals = load_meals(file.path()).unwrap();
        assert_eq!(meals.len(), 1);
        // Last occurrence wins.
        assert_eq!(meals[0].id, 2);
        assert_eq!(meals[0].wins, 5);
    }

    #[test]
    fn test_load_sorts_by_id() {
        let json = r#"[
            {"id": 3, "name": "C", "cuisine": "X", "price": 1.0, "difficulty": "LOW"},
            {"id": 1, "name": "A", "cuisine": "X", "price": 1.0, "difficulty": "LOW"},
            {"id": 2, "name": "B", "cuisine": "X", "price": 1.0, "difficulty": "LOW"}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let meals = load_meals(file.path()).unwrap();
        let ids: Vec<u64> = meals.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
