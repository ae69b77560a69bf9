use crate::models::Meal;

/// Divisor that normalizes the score gap into the [0, 1] upset threshold.
const DELTA_SCALE: f64 = 100.0;

/// Deterministic battle score for a single meal.
///
/// Formula: `price * chars(cuisine) - difficulty modifier`. The cuisine
/// length counts Unicode scalar values. No rounding is applied; the score
/// can go negative for cheap meals with a large modifier.
pub fn battle_score(meal: &Meal) -> f64 {
    meal.price * meal.cuisine.chars().count() as f64 - meal.difficulty.score_modifier()
}

/// Normalized score gap between two meals, clamped to [0, 1].
///
/// This is the upset threshold in battle resolution: a random draw strictly
/// below it hands the win to the lower-scoring meal.
pub fn upset_threshold(first: &Meal, second: &Meal) -> f64 {
    ((battle_score(first) - battle_score(second)).abs() / DELTA_SCALE).min(1.0)
}
