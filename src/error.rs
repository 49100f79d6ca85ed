use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    #[error("Recipe '{0}' already exists")]
    DuplicateRecipe(String),

    #[error("No {meal_type} planned for day {day}")]
    SlotNotFound { day: u32, meal_type: String },

    #[error("Cannot convert '{from}' to '{to}' - incompatible unit types")]
    IncompatibleUnits { from: String, to: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No recipes available. Add some recipes first")]
    NoRecipes,

    #[error("No meal plan found. Generate one first")]
    EmptyPlan,
}

pub type Result<T> = std::result::Result<T, PlannerError>;
