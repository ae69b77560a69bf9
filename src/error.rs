use thiserror::Error;

#[derive(Debug, Error)]
pub enum MealError {
    #[error("Combatant list is full")]
    CombatantsFull,

    #[error("Two combatants must be prepped for a battle")]
    TwoCombatantsRequired,

    #[error("Meal with ID {0} not found")]
    MealIdNotFound(u64),

    #[error("Meal with name {0} not found")]
    MealNameNotFound(String),

    #[error("Meal with ID {0} has been deleted")]
    MealDeleted(u64),

    #[error("Meal with name {0} has been deleted")]
    MealNameDeleted(String),

    #[error("Meal with name '{0}' already exists")]
    DuplicateMealName(String),

    #[error("Invalid price: {0}. Price must be a positive number.")]
    InvalidPrice(f64),

    #[error("Invalid difficulty level: {0}. Must be 'LOW', 'MED', or 'HIGH'.")]
    InvalidDifficulty(String),

    #[error("Invalid sort_by parameter: {0}")]
    InvalidSortBy(String),

    #[error("Request to random.org timed out.")]
    RandomTimeout,

    #[error("Request to random.org failed: {0}")]
    RandomRequest(String),

    #[error("Invalid response from random.org: {0}")]
    RandomParse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl MealError {
    /// Whether this is a recoverable staging error: the caller can clear or
    /// fix the combatant slots and retry.
    pub fn is_staging_error(&self) -> bool {
        matches!(
            self,
            MealError::CombatantsFull | MealError::TwoCombatantsRequired
        )
    }
}

pub type Result<T> = std::result::Result<T, MealError>;
