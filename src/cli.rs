use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::grocery::ExportFormat;
use crate::models::MealType;

/// Meal planner - recipes, weekly plans, pantry stock, and grocery lists.
#[derive(Parser, Debug)]
#[command(name = "meal_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the database file (defaults to the OS data directory).
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage the recipe collection.
    Recipe {
        #[command(subcommand)]
        action: RecipeAction,
    },

    /// Generate and adjust the weekly meal plan.
    Plan {
        #[command(subcommand)]
        action: PlanAction,
    },

    /// Build and export grocery lists from the current plan.
    Grocery {
        #[command(subcommand)]
        action: GroceryAction,
    },

    /// Track pantry stock.
    Pantry {
        #[command(subcommand)]
        action: PantryAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum RecipeAction {
    /// Add a new recipe (interactive).
    Add,

    /// List recipes, grouped by meal type.
    List {
        /// Filter by meal type.
        #[arg(short, long)]
        meal_type: Option<MealType>,

        /// Require a dietary tag (repeatable).
        #[arg(short, long)]
        tag: Vec<String>,
    },

    /// Show one recipe in full.
    View {
        /// Recipe name.
        name: String,
    },

    /// Delete a recipe. Plan slots using it are cleared.
    Delete {
        /// Recipe name.
        name: String,

        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },

    /// Import recipes from a JSON file.
    Import {
        /// JSON file path.
        file: PathBuf,
    },

    /// Export recipes to a JSON file.
    Export {
        /// Output file path.
        #[arg(short, long, default_value = "exports/recipes.json")]
        output: PathBuf,

        /// Filter by meal type.
        #[arg(short, long)]
        meal_type: Option<MealType>,
    },
}

#[derive(Subcommand, Debug)]
pub enum PlanAction {
    /// Generate a randomized plan, replacing the stored one.
    Generate {
        /// Number of days to plan (1-14).
        #[arg(short, long, default_value_t = 7)]
        days: u32,

        /// Servings per meal.
        #[arg(short, long, default_value_t = 2)]
        servings: u32,

        /// Exclude breakfast slots.
        #[arg(long)]
        no_breakfast: bool,

        /// Exclude lunch slots.
        #[arg(long)]
        no_lunch: bool,

        /// Exclude dinner slots.
        #[arg(long)]
        no_dinner: bool,

        /// Require a dietary tag on every recipe (repeatable).
        #[arg(short, long)]
        tag: Vec<String>,
    },

    /// Show the current plan.
    View,

    /// Swap one slot's recipe.
    Swap {
        /// Day number (1-14).
        day: u32,

        /// Meal type of the slot.
        meal_type: MealType,

        /// New recipe name (shows suggestions when omitted).
        recipe: Option<String>,
    },

    /// Adjust one slot's servings.
    Servings {
        /// Day number (1-14).
        day: u32,

        /// Meal type of the slot.
        meal_type: MealType,

        /// New servings count.
        servings: u32,
    },

    /// Clear the stored plan.
    Clear {
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum GroceryAction {
    /// Show the consolidated grocery list for the current plan.
    Generate {
        /// Don't deduct pantry stock.
        #[arg(long)]
        no_pantry: bool,
    },

    /// Export the grocery list to a file.
    Export {
        /// Export format.
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Txt)]
        format: ExportFormat,

        /// Output file path.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Don't deduct pantry stock.
        #[arg(long)]
        no_pantry: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum PantryAction {
    /// Add stock, merging with any existing (ingredient, unit) entry.
    Add {
        /// Ingredient name.
        ingredient: String,

        /// Quantity to add.
        quantity: f64,

        /// Unit (e.g. cups, oz, lb).
        unit: String,
    },

    /// List pantry stock, grouped by store category.
    List,

    /// Replace the stored quantity (0 removes the entry).
    Update {
        /// Ingredient name.
        ingredient: String,

        /// New quantity.
        quantity: f64,

        /// Unit.
        unit: String,
    },

    /// Remove an ingredient from the pantry.
    Remove {
        /// Ingredient name.
        ingredient: String,

        /// Only remove this unit's entry.
        #[arg(short, long)]
        unit: Option<String>,
    },

    /// Remove everything from the pantry.
    Clear {
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
}
