use std::path::Path;

use crate::error::Result;
use crate::models::LeaderboardEntry;

/// Write the leaderboard to a CSV file, one row per ranked meal.
pub fn write_leaderboard_csv(entries: &[LeaderboardEntry], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "rank",
        "id",
        "name",
        "cuisine",
        "price",
        "difficulty",
        "battles",
        "wins",
        "win_pct",
    ])?;

    for (i, entry) in entries.iter().enumerate() {
        wtr.write_record([
            (i + 1).to_string(),
            entry.id.to_string(),
            entry.name.clone(),
            entry.cuisine.clone(),
            format!("{:.2}", entry.price),
            entry.difficulty.to_string(),
            entry.battles.to_string(),
            entry.wins.to_string(),
            format!("{:.1}", entry.win_pct),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
