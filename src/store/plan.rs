use rusqlite::{params, OptionalExtension};

use crate::error::{PlannerError, Result};
use crate::models::{MealPlan, MealType, PlannedMeal};
use crate::store::Database;

impl Database {
    /// Load the stored meal plan. Empty plan if none has been saved.
    pub fn current_plan(&self) -> Result<MealPlan> {
        let mut stmt = self.conn.prepare(
            "SELECT mp.day_number, mp.meal_type, r.name, mp.servings
             FROM meal_plan mp
             JOIN recipes r ON mp.recipe_id = r.id
             ORDER BY mp.day_number, mp.meal_type",
        )?;

        let slots: Vec<(u32, String, String, u32)> = stmt
            .query_map([], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
            })?
            .collect::<std::result::Result<_, _>>()?;
        drop(stmt);

        let mut meals = Vec::with_capacity(slots.len());
        for (day, meal_type, recipe_name, servings) in slots {
            let meal_type: MealType = meal_type.parse()?;
            // The join guarantees the recipe row exists.
            if let Some(recipe) = self.get_recipe(&recipe_name)? {
                meals.push(PlannedMeal {
                    day,
                    meal_type,
                    recipe,
                    servings,
                });
            }
        }

        meals.sort_by_key(|m| {
            (
                m.day,
                MealType::ALL.iter().position(|t| *t == m.meal_type),
            )
        });

        Ok(MealPlan::new(meals))
    }

    /// Replace the stored plan with `plan`.
    pub fn save_plan(&mut self, plan: &MealPlan) -> Result<()> {
        let tx = self.conn.transaction()?;

        tx.execute("DELETE FROM meal_plan", [])?;

        for meal in &plan.meals {
            let recipe_id = meal.recipe.id.ok_or_else(|| {
                PlannerError::RecipeNotFound(meal.recipe.name.clone())
            })?;
            tx.execute(
                "INSERT INTO meal_plan (day_number, meal_type, recipe_id, servings)
                 VALUES (?1, ?2, ?3, ?4)",
                params![meal.day, meal.meal_type.as_str(), recipe_id, meal.servings],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    /// Delete the stored plan. Returns the number of slots removed.
    pub fn clear_plan(&mut self) -> Result<usize> {
        Ok(self.conn.execute("DELETE FROM meal_plan", [])?)
    }

    /// Replace the recipe in one (day, meal type) slot, keeping its servings.
    ///
    /// The replacement must exist and match the slot's meal type.
    pub fn swap_slot(&mut self, day: u32, meal_type: MealType, recipe_name: &str) -> Result<()> {
        let recipe = self
            .get_recipe(recipe_name)?
            .ok_or_else(|| PlannerError::RecipeNotFound(recipe_name.to_string()))?;

        if recipe.meal_type != meal_type {
            return Err(PlannerError::InvalidInput(format!(
                "Recipe '{}' is a {} recipe, not {}",
                recipe.name, recipe.meal_type, meal_type
            )));
        }

        let slot_exists: Option<i64> = self
            .conn
            .query_row(
                "SELECT id FROM meal_plan WHERE day_number = ?1 AND meal_type = ?2",
                params![day, meal_type.as_str()],
                |row| row.get(0),
            )
            .optional()?;

        let Some(slot_id) = slot_exists else {
            return Err(PlannerError::SlotNotFound {
                day,
                meal_type: meal_type.to_string(),
            });
        };

        self.conn.execute(
            "UPDATE meal_plan SET recipe_id = ?1 WHERE id = ?2",
            params![recipe.id, slot_id],
        )?;
        Ok(())
    }

    /// Adjust the servings of one slot.
    pub fn set_slot_servings(&mut self, day: u32, meal_type: MealType, servings: u32) -> Result<()> {
        if servings == 0 {
            return Err(PlannerError::InvalidInput(
                "Servings must be at least 1".to_string(),
            ));
        }

        let updated = self.conn.execute(
            "UPDATE meal_plan SET servings = ?1 WHERE day_number = ?2 AND meal_type = ?3",
            params![servings, day, meal_type.as_str()],
        )?;

        if updated == 0 {
            return Err(PlannerError::SlotNotFound {
                day,
                meal_type: meal_type.to_string(),
            });
        }
        Ok(())
    }
}
