use std::collections::HashMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{PlannerError, Result};
use crate::models::{MealPlan, MealType, PlannedMeal, Recipe, MAX_PLAN_DAYS};

/// How many recent picks of the same meal type to avoid repeating.
const REPEAT_LOOKBACK: usize = 7;

/// Knobs for plan generation.
#[derive(Debug, Clone)]
pub struct PlanOptions {
    /// Number of days to plan, 1 through 14.
    pub days: u32,

    /// Which slots to fill each day, in order.
    pub meals: Vec<MealType>,

    /// Servings to cook per slot.
    pub servings: u32,

    /// Dietary tags every selected recipe must carry.
    pub tags: Vec<String>,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            days: 7,
            meals: vec![MealType::Breakfast, MealType::Lunch, MealType::Dinner],
            servings: 2,
            tags: Vec::new(),
        }
    }
}

/// Generate a randomized plan from the recipe collection.
///
/// Each (day, slot) picks uniformly among recipes of the slot's meal type,
/// avoiding the most recent picks of that type when the collection is large
/// enough to allow it.
pub fn generate_plan(recipes: &[Recipe], options: &PlanOptions) -> Result<MealPlan> {
    generate_plan_with_rng(recipes, options, &mut rand::thread_rng())
}

/// Deterministic variant used by tests.
pub fn generate_plan_with_rng<R: Rng + ?Sized>(
    recipes: &[Recipe],
    options: &PlanOptions,
    rng: &mut R,
) -> Result<MealPlan> {
    if options.days < 1 || options.days > MAX_PLAN_DAYS {
        return Err(PlannerError::InvalidInput(format!(
            "Days must be between 1 and {}",
            MAX_PLAN_DAYS
        )));
    }
    if options.servings < 1 {
        return Err(PlannerError::InvalidInput(
            "Servings must be at least 1".to_string(),
        ));
    }
    if options.meals.is_empty() {
        return Err(PlannerError::InvalidInput(
            "At least one meal type must be selected".to_string(),
        ));
    }
    if recipes.is_empty() {
        return Err(PlannerError::NoRecipes);
    }

    let mut by_type: HashMap<MealType, Vec<&Recipe>> = HashMap::new();
    for meal_type in &options.meals {
        let pool: Vec<&Recipe> = recipes
            .iter()
            .filter(|r| r.meal_type == *meal_type)
            .collect();

        if pool.is_empty() {
            return Err(PlannerError::InvalidInput(format!(
                "No {} recipes available",
                meal_type
            )));
        }
        by_type.insert(*meal_type, pool);
    }

    let mut meals = Vec::new();
    let mut recent: HashMap<MealType, Vec<String>> = HashMap::new();

    for day in 1..=options.days {
        for meal_type in &options.meals {
            let pool = &by_type[meal_type];

            // Avoid recent repeats, but never starve the candidate pool.
            let lookback = REPEAT_LOOKBACK.min(pool.len().saturating_sub(1));
            let avoid = recent.entry(*meal_type).or_default();
            let avoid_keys: Vec<String> = avoid
                .iter()
                .rev()
                .take(lookback)
                .cloned()
                .collect();

            let candidates: Vec<&&Recipe> = pool
                .iter()
                .filter(|r| !avoid_keys.contains(&r.key()))
                .collect();

            let selected = if candidates.is_empty() {
                pool.choose(rng).copied()
            } else {
                candidates.choose(rng).map(|r| **r)
            };

            // Pools are checked non-empty above.
            let Some(recipe) = selected else { continue };

            avoid.push(recipe.key());
            meals.push(PlannedMeal {
                day,
                meal_type: *meal_type,
                recipe: recipe.clone(),
                servings: options.servings,
            });
        }
    }

    Ok(MealPlan::new(meals))
}
