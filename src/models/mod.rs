mod grocery;
mod pantry;
mod plan;
mod recipe;

pub use grocery::GroceryItem;
pub use pantry::PantryItem;
pub use plan::{day_name, MealPlan, PlannedMeal, MAX_PLAN_DAYS};
pub use recipe::{MealType, Recipe, RecipeIngredient};
