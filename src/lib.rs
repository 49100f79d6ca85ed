pub mod cli;
pub mod error;
pub mod grocery;
pub mod interface;
pub mod models;
pub mod planner;
pub mod store;
pub mod units;

pub use error::{PlannerError, Result};
pub use models::{GroceryItem, MealPlan, MealType, PantryItem, Recipe, RecipeIngredient};
