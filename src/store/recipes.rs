use std::fs;
use std::path::Path;

use rusqlite::{params, OptionalExtension};
use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::models::{MealType, Recipe, RecipeIngredient};
use crate::store::database::intern_ingredient;
use crate::store::Database;

/// Wire format for recipe import/export files.
#[derive(Debug, Serialize, Deserialize)]
struct RecipeFile {
    recipes: Vec<Recipe>,
}

/// Per-recipe outcome counts from a JSON import.
#[derive(Debug, Default)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped: usize,
    pub failed: usize,
    pub messages: Vec<String>,
}

impl Database {
    /// Insert a recipe with its ingredient lines and tags.
    ///
    /// Rejects duplicates by case-insensitive name.
    pub fn add_recipe(&mut self, recipe: &Recipe) -> Result<i64> {
        if !recipe.is_valid() {
            return Err(PlannerError::InvalidInput(
                "Recipe needs a name, at least one ingredient, and positive servings".to_string(),
            ));
        }

        if self.get_recipe(&recipe.name)?.is_some() {
            return Err(PlannerError::DuplicateRecipe(recipe.name.clone()));
        }

        let tx = self.conn.transaction()?;

        tx.execute(
            "INSERT INTO recipes (name, meal_type, prep_time, cook_time, servings, cuisine, instructions)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                recipe.name,
                recipe.meal_type.as_str(),
                recipe.prep_time,
                recipe.cook_time,
                recipe.servings,
                recipe.cuisine,
                recipe.instructions,
            ],
        )?;
        let recipe_id = tx.last_insert_rowid();

        for ing in &recipe.ingredients {
            let ingredient_id = intern_ingredient(&tx, &ing.name)?;
            tx.execute(
                "INSERT INTO recipe_ingredients (recipe_id, ingredient_id, quantity, unit, preparation)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![recipe_id, ingredient_id, ing.quantity, ing.unit, ing.preparation],
            )?;
        }

        for tag in &recipe.dietary_tags {
            tx.execute(
                "INSERT OR IGNORE INTO dietary_tags (recipe_id, tag) VALUES (?1, ?2)",
                params![recipe_id, tag],
            )?;
        }

        tx.commit()?;
        Ok(recipe_id)
    }

    /// Look up a recipe by case-insensitive name.
    pub fn get_recipe(&self, name: &str) -> Result<Option<Recipe>> {
        let header = self
            .conn
            .query_row(
                "SELECT id, name, meal_type, prep_time, cook_time, servings, cuisine, instructions
                 FROM recipes WHERE name = ?1 COLLATE NOCASE",
                [name],
                row_to_header,
            )
            .optional()?;

        let Some(mut recipe) = header else {
            return Ok(None);
        };

        let id = recipe.id.unwrap_or_default();
        recipe.ingredients = self.recipe_ingredients(id)?;
        recipe.dietary_tags = self.recipe_tags(id)?;
        Ok(Some(recipe))
    }

    /// All recipes, optionally filtered by meal type and required tags.
    ///
    /// Tag filtering requires every listed tag. Results sort by name.
    pub fn list_recipes(
        &self,
        meal_type: Option<MealType>,
        tags: &[String],
    ) -> Result<Vec<Recipe>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, meal_type, prep_time, cook_time, servings, cuisine, instructions
             FROM recipes ORDER BY name COLLATE NOCASE",
        )?;

        let headers: Vec<Recipe> = stmt
            .query_map([], row_to_header)?
            .collect::<std::result::Result<_, _>>()?;
        drop(stmt);

        let mut recipes = Vec::with_capacity(headers.len());
        for mut recipe in headers {
            if let Some(mt) = meal_type {
                if recipe.meal_type != mt {
                    continue;
                }
            }

            let id = recipe.id.unwrap_or_default();
            recipe.dietary_tags = self.recipe_tags(id)?;

            if !tags.iter().all(|t| {
                recipe
                    .dietary_tags
                    .iter()
                    .any(|have| have.eq_ignore_ascii_case(t))
            }) {
                continue;
            }

            recipe.ingredients = self.recipe_ingredients(id)?;
            recipes.push(recipe);
        }

        Ok(recipes)
    }

    /// Delete a recipe by name. Plan slots referencing it are cascade-cleared.
    pub fn delete_recipe(&mut self, name: &str) -> Result<bool> {
        let deleted = self.conn.execute(
            "DELETE FROM recipes WHERE name = ?1 COLLATE NOCASE",
            [name],
        )?;
        Ok(deleted > 0)
    }

    /// Import recipes from a `{"recipes": [...]}` JSON file.
    ///
    /// Existing names are skipped, invalid entries counted as failures; one
    /// bad recipe never aborts the rest.
    pub fn import_recipes(&mut self, path: &Path) -> Result<ImportReport> {
        let content = fs::read_to_string(path)?;
        let file: RecipeFile = serde_json::from_str(&content)?;

        if file.recipes.is_empty() {
            return Err(PlannerError::InvalidInput(
                "No recipes found in JSON file".to_string(),
            ));
        }

        let mut report = ImportReport::default();

        for recipe in &file.recipes {
            match self.add_recipe(recipe) {
                Ok(_) => report.imported += 1,
                Err(PlannerError::DuplicateRecipe(name)) => {
                    report.skipped += 1;
                    report
                        .messages
                        .push(format!("Skipped '{}' - already exists", name));
                }
                Err(e) => {
                    report.failed += 1;
                    report
                        .messages
                        .push(format!("Failed '{}': {}", recipe.name, e));
                }
            }
        }

        Ok(report)
    }

    /// Export recipes to a JSON file, optionally filtered by meal type.
    /// Returns the number written.
    pub fn export_recipes(&self, path: &Path, meal_type: Option<MealType>) -> Result<usize> {
        let recipes = self.list_recipes(meal_type, &[])?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = RecipeFile { recipes };
        fs::write(path, serde_json::to_string_pretty(&file)?)?;
        Ok(file.recipes.len())
    }

    fn recipe_ingredients(&self, recipe_id: i64) -> Result<Vec<RecipeIngredient>> {
        let mut stmt = self.conn.prepare(
            "SELECT i.name, ri.quantity, ri.unit, ri.preparation
             FROM recipe_ingredients ri
             JOIN ingredients i ON ri.ingredient_id = i.id
             WHERE ri.recipe_id = ?1
             ORDER BY ri.id",
        )?;

        let rows = stmt.query_map([recipe_id], |row| {
            Ok(RecipeIngredient {
                name: row.get(0)?,
                quantity: row.get(1)?,
                unit: row.get(2)?,
                preparation: row.get(3)?,
            })
        })?;

        Ok(rows.collect::<std::result::Result<_, _>>()?)
    }

    fn recipe_tags(&self, recipe_id: i64) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT tag FROM dietary_tags WHERE recipe_id = ?1 ORDER BY tag")?;

        let rows = stmt.query_map([recipe_id], |row| row.get(0))?;
        Ok(rows.collect::<std::result::Result<_, _>>()?)
    }
}

fn row_to_header(row: &rusqlite::Row<'_>) -> std::result::Result<Recipe, rusqlite::Error> {
    let meal_type: String = row.get(2)?;
    Ok(Recipe {
        id: Some(row.get(0)?),
        name: row.get(1)?,
        meal_type: meal_type.parse().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                2,
                rusqlite::types::Type::Text,
                format!("invalid meal type: {}", meal_type).into(),
            )
        })?,
        prep_time: row.get(3)?,
        cook_time: row.get(4)?,
        servings: row.get(5)?,
        cuisine: row.get(6)?,
        instructions: row.get(7)?,
        dietary_tags: Vec::new(),
        ingredients: Vec::new(),
    })
}
