use crate::models::{MealType, Recipe};

/// Longest plan we will generate or store.
pub const MAX_PLAN_DAYS: u32 = 14;

/// One slot of the meal plan: a recipe scheduled for (day, meal type).
#[derive(Debug, Clone)]
pub struct PlannedMeal {
    /// Day number, 1-based.
    pub day: u32,

    pub meal_type: MealType,

    pub recipe: Recipe,

    /// Servings to cook, independent of the recipe's base servings.
    pub servings: u32,
}

impl PlannedMeal {
    /// Weekday name for days 1-7, "Day N" beyond that.
    pub fn day_name(&self) -> String {
        day_name(self.day)
    }

    /// Factor applied to ingredient quantities when shopping for this slot.
    pub fn serving_multiplier(&self) -> f64 {
        if self.recipe.servings == 0 {
            return 0.0;
        }
        self.servings as f64 / self.recipe.servings as f64
    }
}

pub fn day_name(day: u32) -> String {
    const DAYS: [&str; 7] = [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ];
    match day {
        1..=7 => DAYS[day as usize - 1].to_string(),
        n => format!("Day {}", n),
    }
}

/// A sparse mapping of (day, meal type) slots to recipes.
#[derive(Debug, Clone, Default)]
pub struct MealPlan {
    pub meals: Vec<PlannedMeal>,
    pub days: u32,
}

impl MealPlan {
    pub fn new(meals: Vec<PlannedMeal>) -> Self {
        let days = meals.iter().map(|m| m.day).max().unwrap_or(0);
        Self { meals, days }
    }

    pub fn meals_for_day(&self, day: u32) -> Vec<&PlannedMeal> {
        self.meals.iter().filter(|m| m.day == day).collect()
    }

    pub fn get_slot(&self, day: u32, meal_type: MealType) -> Option<&PlannedMeal> {
        self.meals
            .iter()
            .find(|m| m.day == day && m.meal_type == meal_type)
    }

    /// Distinct recipe names scheduled anywhere in the plan.
    pub fn recipe_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.meals.iter().map(|m| m.recipe.name.clone()).collect();
        names.sort();
        names.dedup();
        names
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }
}
